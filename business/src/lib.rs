pub mod application {
    pub mod recommendation {
        pub mod recommend;
    }
}

pub mod domain {
    pub mod logger;
    pub mod recommendation {
        pub mod catalog;
        pub mod errors;
        pub mod face;
        pub mod matcher;
        pub mod model;
        pub mod prompt;
        pub mod services;
        pub mod use_cases {
            pub mod recommend;
        }
    }
}
