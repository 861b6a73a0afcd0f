// Octane services
// Services provide functionality that outlives any single tab: the
// persisted home-URL preference.

pub mod homepage_store;
