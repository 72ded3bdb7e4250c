pub mod evidence;

pub use evidence::EvidenceService;
