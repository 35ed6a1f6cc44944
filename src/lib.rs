pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod event_bus;
        pub mod intent_outbox;
    }
}

pub mod modules {
    pub mod cart {
        pub mod core {
            pub mod events;
            pub mod evolve;
            pub mod intents;
            pub mod line_item;
            pub mod state;
        }
        pub mod use_cases {
            pub mod mutate_cart {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod view_cart {
                pub mod projection;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod cart_repository;
                pub mod cart_repository_in_memory;
                pub mod cart_sync;
            }
        }
        pub mod sessions;
    }

    pub mod payments {
        pub mod core {
            pub mod events;
            pub mod evolve;
            pub mod gateway;
            pub mod state;
        }
        pub mod strategies;
        pub mod use_cases {
            pub mod retry_payment {
                pub mod command;
                pub mod handler;
                pub mod registry;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod verify_return {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod checkout_sdk;
                pub mod checkout_sdk_in_memory;
                pub mod payment_backend;
                pub mod payment_backend_in_memory;
            }
        }
    }

    pub mod notifications {
        pub mod core {
            pub mod feed;
            pub mod notification;
            pub mod order_change;
            pub mod polling;
        }
        pub mod use_cases {
            pub mod deliver_notification {
                pub mod handler;
            }
            pub mod push_channel {
                pub mod handler;
                pub mod translate;
            }
            pub mod poll_channel {
                pub mod differ;
                pub mod handler;
            }
            pub mod list_notifications {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod alert_sink;
                pub mod orders_backend;
            }
        }
    }

    pub mod orders {
        pub mod core {
            pub mod order;
        }
        pub mod use_cases {
            pub mod track_order {
                pub mod queries_port;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod orders_in_memory;
            }
        }
    }
}

pub mod shell;
