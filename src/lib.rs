pub mod app;

pub mod shared {
    pub mod accounts;
    pub mod app;
    pub mod handlers {
        pub mod debug_handler;
        pub mod postgres_handler;
    }
    pub mod types {
        pub mod account;
        pub mod app;
        pub mod error;
    }
    pub mod util {
        pub mod config;
        pub mod handler;
        pub mod secret;
        pub mod validate;
    }
}

pub mod kanban {
    pub mod app;
    pub mod repository;
    pub mod handlers {
        pub mod debug_handler;
        pub mod postgres_handler;
    }
    pub mod types {
        pub mod board;
        pub mod card;
    }
    pub mod util {
        pub mod handler;
        pub mod progress;
    }
}
