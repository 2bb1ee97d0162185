pub mod application {
    pub mod product {
        pub mod block;
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_name;
        mod lookup;
        pub mod update_stock;
    }
    pub mod purchase_requirement {
        pub mod generate;
        pub mod get_latest;
        pub mod override_amount;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod block;
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_name;
            pub mod update_stock;
        }
    }
    pub mod purchase_requirement {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod generate;
            pub mod get_latest;
            pub mod override_amount;
        }
    }
    pub mod shared {
        pub mod time;
    }
}
