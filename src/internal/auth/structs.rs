pub mod report_api_auth;
