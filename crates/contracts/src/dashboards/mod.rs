pub mod d400_overview;
pub mod d401_reports;
pub mod d402_client_portal;
