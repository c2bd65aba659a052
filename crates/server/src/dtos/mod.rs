pub mod gps_dto;
