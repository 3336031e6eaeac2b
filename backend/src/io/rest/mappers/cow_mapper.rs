use shared::{CowListResponse, CowResponse, DeleteCowResponse, SaveCowRequest};

use crate::domain::commands::cows::{DeleteCowResult, SaveCowCommand, SaveCowResult};
use crate::domain::models::cow::Cow;

/// Mapper between the cow DTOs and domain cows
pub struct CowMapper;

impl CowMapper {
    pub fn to_save_command(dto: SaveCowRequest) -> SaveCowCommand {
        SaveCowCommand {
            tag_number: dto.tag_number,
            name: dto.name,
            dob: dto.dob,
            image: dto.image,
        }
    }

    pub fn to_cow_list_dto(cows: Vec<Cow>) -> CowListResponse {
        CowListResponse {
            cows: cows.into_iter().map(Into::into).collect(),
        }
    }

    pub fn to_cow_response_dto(result: SaveCowResult) -> CowResponse {
        CowResponse {
            cow: result.cow.into(),
            success_message: result.success_message,
        }
    }

    pub fn to_delete_response_dto(result: DeleteCowResult) -> DeleteCowResponse {
        DeleteCowResponse {
            deleted_cow_id: result.deleted_cow_id,
            removed_inseminations: result.removed_inseminations,
            success_message: result.success_message,
        }
    }
}
