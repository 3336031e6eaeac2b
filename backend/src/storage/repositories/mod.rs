pub mod cow_repository;
pub mod farmer_repository;
pub mod insemination_repository;
pub mod session_repository;

pub use cow_repository::CowRepository;
pub use farmer_repository::FarmerRepository;
pub use insemination_repository::InseminationRepository;
pub use session_repository::SessionRepository;
