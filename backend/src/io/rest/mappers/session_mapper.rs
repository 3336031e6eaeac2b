use shared::{LoginRequest, SessionResponse};

use crate::domain::commands::session::LoginCommand;
use crate::domain::models::session::Session;

/// Mapper between the session DTOs and domain sessions
pub struct SessionMapper;

impl SessionMapper {
    pub fn to_login_command(dto: LoginRequest) -> LoginCommand {
        LoginCommand {
            mobile: dto.mobile,
            farm_name: dto.farm_name,
        }
    }

    pub fn to_session_dto(session: Option<Session>) -> SessionResponse {
        SessionResponse {
            farmer: session.map(|s| s.farmer.into()),
        }
    }
}
