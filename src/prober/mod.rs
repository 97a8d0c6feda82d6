mod engine;

pub use engine::Prober;
