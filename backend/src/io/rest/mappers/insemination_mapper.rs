use shared::{
    CreateInseminationRequest, InseminationFilter, InseminationListResponse, InseminationResponse,
};

use crate::domain::commands::inseminations::{
    CreateInseminationCommand, InseminationListQuery, InseminationResult,
};
use crate::domain::models::insemination::InseminationRecord;

/// Mapper between the insemination DTOs and domain records
pub struct InseminationMapper;

impl InseminationMapper {
    pub fn to_create_command(dto: CreateInseminationRequest) -> CreateInseminationCommand {
        CreateInseminationCommand {
            cow_id: dto.cow_id,
            date: dto.date,
            doctor_name: dto.doctor_name,
            bull_name: dto.bull_name,
            notes: dto.notes,
        }
    }

    pub fn to_list_query(filter: InseminationFilter) -> InseminationListQuery {
        InseminationListQuery {
            status: filter.status,
            start_date: filter.start_date,
            end_date: filter.end_date,
        }
    }

    pub fn to_list_dto(records: Vec<InseminationRecord>) -> InseminationListResponse {
        InseminationListResponse {
            records: records.into_iter().map(Into::into).collect(),
        }
    }

    pub fn to_response_dto(result: InseminationResult) -> InseminationResponse {
        InseminationResponse {
            record: result.record.into(),
            success_message: result.success_message,
        }
    }
}
