use crate::configuration::Settings;
use crate::routes::{health_check, index, list_users, process};
use crate::store::UserStore;
use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, dev::Server, web};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

/// `Application` works as a wrapper for actix_web `dev::Server`.
/// `dev::Server` does not tell us in which port the app was allocated, so we
/// wrap it in a struct carrying the port alongside it. Why do we need to know
/// the port? The tests bind port 0 and need to find out where they landed.
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Given a configuration of type `Settings`:
    /// 1. A fresh, empty `UserStore` is created (all records live and die
    ///    with the process)
    /// 2. A server is started with `run`, which can be awaited using
    ///    `run_until_stopped`
    pub async fn build(configuration: Settings) -> Result<Self, std::io::Error> {
        let store = web::Data::new(UserStore::new());

        let listener = TcpListener::bind(configuration.application.address())?;
        let port = listener.local_addr()?.port();

        let server = run(listener, store)?;
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// This function only returns when the application is stopped
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(listener: TcpListener, store: web::Data<UserStore>) -> Result<Server, std::io::Error> {
    let server = HttpServer::new(move || {
        // A body that is not valid JSON never reaches the handler; report it
        // with the same `error` envelope the ingest handler uses
        let json_config = web::JsonConfig::default().error_handler(|err, _req| {
            let body = serde_json::json!({
                "error": format!("Error processing data: {err}"),
            });
            actix_web::error::InternalError::from_response(
                err,
                HttpResponse::InternalServerError().json(body),
            )
            .into()
        });

        App::new()
            .wrap(TracingLogger::default())
            // The form frontend is served from another origin
            .wrap(Cors::permissive())
            .route("/", web::get().to(index))
            .route("/process", web::post().to(process))
            .route("/users", web::get().to(list_users))
            .route("/health", web::get().to(health_check))
            .app_data(json_config)
            .app_data(store.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
