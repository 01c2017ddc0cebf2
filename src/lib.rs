pub mod shared {
    pub mod infrastructure {
        pub mod employee_store;
    }
}

pub mod modules {
    pub mod employees {
        pub mod core {
            pub mod employee;
            pub mod errors;
        }
        pub mod use_cases {
            pub mod list_employees {
                pub mod pagination;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_employee {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_employee {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_employee {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_employee {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod employee_body;
                pub mod path_id;
            }
        }
    }
}

pub mod shell;
