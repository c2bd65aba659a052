pub mod json_payload;
