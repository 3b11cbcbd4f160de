pub mod data {
    pub mod datasources {
        pub(crate) mod utils;
        pub mod verify_receipt_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod verify_receipt {
            pub(crate) mod in_app_purchase_transaction_model;
            pub(crate) mod receipt_model;
        }
    }
    pub mod repositories {
        pub mod receipt_repository_impl;
    }
}

pub mod domain {
    pub mod entities {
        pub mod in_app_transaction;
        pub mod receipt;
        pub mod receipt_date;
        pub mod verdict;
    }
    pub mod repositories {
        pub mod receipt_repository;
    }
}

pub mod errors;
pub mod util;
