pub mod cow_mapper;
pub mod herd_mapper;
pub mod insemination_mapper;
pub mod session_mapper;

pub use cow_mapper::CowMapper;
pub use herd_mapper::HerdMapper;
pub use insemination_mapper::InseminationMapper;
pub use session_mapper::SessionMapper;
