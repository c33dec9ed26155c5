mod lga_service;

pub use lga_service::LgaService;
