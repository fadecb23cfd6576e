pub mod buyback {
    pub mod office {
        /// Cron expression for the daily office sync.
        /// Runs at 11:10 UTC, shortly after EVE's daily downtime.
        pub const CRON_EXPRESSION: &str = "0 10 11 * * *";
    }

    pub mod market_price {
        /// Cron expression for the daily reference price refresh.
        /// Runs at 11:30 UTC, once ESI publishes fresh price data.
        pub const CRON_EXPRESSION: &str = "0 30 11 * * *";
    }

    pub mod item_type {
        /// Cron expression for the daily item type import.
        /// Runs at 12:00 UTC; the type tree changes rarely.
        pub const CRON_EXPRESSION: &str = "0 0 12 * * *";
    }
}
