pub mod modules {
    pub mod events {
        pub mod core {
            pub mod cost;
            pub mod event;
            pub mod logistics;
            pub mod participant;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod event_service;
            pub mod add_participant {
                pub mod handler;
            }
            pub mod assign_participants {
                pub mod handler;
            }
            pub mod attach_logistics {
                pub mod handler;
            }
            pub mod list_reserved_logistics {
                pub mod handler;
            }
            pub mod recalculate_costs {
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod event_store_in_memory;
                pub mod logistics_store_in_memory;
                pub mod participant_store_in_memory;
            }
        }
    }
}

pub mod shell;
