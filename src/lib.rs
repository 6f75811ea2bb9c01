pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod postgres;
    }
}

pub mod modules {
    pub mod event_registrations {
        pub mod core {
            pub mod admission;
            pub mod event;
            pub mod participant;
            pub mod registration;
            pub mod stats;
        }
        pub mod use_cases {
            pub mod application_error;
            pub mod create_event {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_event {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod register_participant {
                pub mod command;
                pub mod handler;
                pub mod retry_policy;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod cancel_registration {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_upcoming_events {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_event_stats {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
            }
            pub mod outbound {
                pub mod event_store;
                pub mod in_memory;
                pub mod participant_directory;
                pub mod postgres;
                pub mod registration_ledger;
                pub mod store_error;
            }
        }
    }
}

pub mod shell;
