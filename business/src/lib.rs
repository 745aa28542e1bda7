pub mod application {
    pub mod catalog {
        pub mod reader;
    }
    pub mod checkout {
        pub mod place_order;
    }
    pub mod order {
        pub mod get_all;
        pub mod get_for_user;
        pub mod update_status;
    }
    pub mod wishlist {
        pub mod add;
        pub mod clear;
        pub mod get_all;
        pub mod remove;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod model;
        pub mod store;
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod read_catalog;
        }
    }
    pub mod checkout {
        pub mod errors;
        pub mod model;
        pub mod pricing;
        pub mod services;
        pub mod validation;
        pub mod use_cases {
            pub mod place_order;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_for_user;
            pub mod update_status;
        }
    }
    pub mod wishlist {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod clear;
            pub mod get_all;
            pub mod remove;
        }
    }
}
