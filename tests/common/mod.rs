pub mod external_server;
pub mod points_cli;
