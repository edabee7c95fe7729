use std::io;
use std::sync::Arc;

use gradetty::app::{App, gradetty_home};
use gradetty::infra::api::{self, RealGradeClient};
use gradetty::infra::auth_store::{AUTH_FILE, AuthStore};
use gradetty::infra::db::{DB_DIR, DB_FILE, Database};
use gradetty::infra::logging::{LOG_DIR, LOG_FILE};

#[tokio::main]
async fn main() -> io::Result<()> {
    let home = gradetty_home();
    let lock_path = home.join("lock");
    let _lock = gradetty::infra::lock::acquire_lock(&lock_path)
        .map_err(|error| io::Error::other(format!("Error: {error}")))?;

    let log_path = home.join(LOG_DIR).join(LOG_FILE);
    gradetty::infra::logging::init_file_logging(&log_path).map_err(io::Error::other)?;

    let db_path = home.join(DB_DIR).join(DB_FILE);
    let db = Database::open(&db_path).await.map_err(io::Error::other)?;

    let auth_store = AuthStore::new(home.join(AUTH_FILE));
    let client = RealGradeClient::new(&api::api_base_url()).map_err(io::Error::other)?;
    let mut app = App::new(auth_store, Arc::new(client), db).await;

    gradetty::runtime::run(&mut app).await
}
