#![deny(missing_docs)]

//! # Sillywalk Demo Server
//!
//! Documents a small cheese shop API and serves it with actix-web.

use actix_web::middleware::DefaultHeaders;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use serde::Deserialize;
use sillywalk_core::{
    DataType, EndpointDeclaration, ErrorResponse, FieldSpec, Handler, HttpMethod, ModelSchema,
    ParamLocation, Parameter, RegistryConfig, RegistryResult, RouteLog, SharedRegistry,
    SwaggerRegistry,
};
use sillywalk_web::{init_tracing, mount, HandlerSet, ServerConfig};
use std::io;
use std::net::TcpListener;

struct Shopkeeper;

impl ModelSchema for Shopkeeper {
    fn model_id(&self) -> String {
        "Shopkeeper".into()
    }

    fn description(&self) -> String {
        "Runs the cheese shop.".into()
    }

    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::required("name"),
            FieldSpec::required("age"),
            FieldSpec::with_default("birthday", "tomorrow"),
        ]
    }
}

#[derive(Deserialize)]
struct TossQuery {
    target: Option<String>,
}

async fn get_cheese(path: web::Path<String>) -> impl Responder {
    HttpResponse::Ok().body(format!("Cheese {}", path.into_inner()))
}

async fn get_a_holy_hand_grenade(path: web::Path<usize>) -> impl Responder {
    HttpResponse::Ok().body("The holy hand grenade".repeat(path.into_inner()))
}

async fn toss_the_grenade(path: web::Path<u32>, query: web::Query<TossQuery>) -> impl Responder {
    let target = query.into_inner().target.unwrap_or_else(|| "the rabbit".into());
    HttpResponse::Ok().body(format!(
        "Waiting {} seconds to toss the grenade at {}.",
        path.into_inner(),
        target
    ))
}

fn build_registry(config: RegistryConfig) -> RegistryResult<(SharedRegistry, RouteLog)> {
    let log = RouteLog::new();
    let mut registry = SwaggerRegistry::with_binder(config, log.clone())?;
    let base = registry.base_path().trim_end_matches('/').to_string();

    registry.register_model(&Shopkeeper)?;

    registry.register(
        &Handler::new("get_cheese").with_description("Gets cheese, just like the name says."),
        EndpointDeclaration::new(format!("{}/cheese/<cheeseName>", base))
            .parameter(Parameter::new(
                "cheeseName",
                "The name of the cheese to fetch",
                true,
                DataType::Str,
                ParamLocation::Path,
            ))
            .error_response(ErrorResponse::new(400, "Sorry, we're fresh out of that cheese."))
            .error_response(ErrorResponse::new(418, "I'm actually a teapot")),
    )?;

    registry.register(
        &Handler::new("get_a_holy_hand_grenade")
            .with_description("Gets one or more holy hand grenades, just like the name says."),
        EndpointDeclaration::new(format!("{}/holyHandGrenade/<number>", base)),
    )?;

    registry.register(
        &Handler::new("toss_the_grenade")
            .with_description("Toss the holy hand grenade after {number} seconds."),
        EndpointDeclaration::new(format!("{}/holyHandGrenade/<number>", base))
            .method(HttpMethod::Put)
            .parameter(Parameter::new(
                "number",
                "The number of seconds to wait",
                true,
                DataType::Int,
                ParamLocation::Path,
            ))
            .parameter(Parameter::new(
                "target",
                "At whom should I throw the hand grenade?",
                false,
                DataType::Str,
                ParamLocation::Query,
            )),
    )?;

    Ok((registry.into_shared(), log))
}

fn handlers() -> HandlerSet {
    let mut handlers = HandlerSet::new();
    handlers
        .insert("get_cheese", || web::to(get_cheese))
        .insert("get_a_holy_hand_grenade", || web::to(get_a_holy_hand_grenade))
        .insert("toss_the_grenade", || web::to(toss_the_grenade));
    handlers
}

fn build_server(
    listener: TcpListener,
    registry: SharedRegistry,
    log: &RouteLog,
) -> io::Result<actix_web::dev::Server> {
    let bindings = log.bindings().map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    let handlers = handlers();
    let data = web::Data::from(registry);

    Ok(HttpServer::new(move || {
        let bindings = bindings.clone();
        let handlers = handlers.clone();
        App::new()
            .app_data(data.clone())
            .wrap(DefaultHeaders::new().add(("Access-Control-Allow-Origin", "*")))
            .configure(move |cfg| mount(cfg, &bindings, &handlers))
    })
    .listen(listener)?
    .run())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    init_tracing();
    let config = ServerConfig::from_env();
    let (registry, log) = build_registry(config.registry)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    let listener = TcpListener::bind(&config.bind_addr)?;
    tracing::info!(bind = %config.bind_addr, "serving swagger documents");
    let server = build_server(listener, registry, &log)?;

    if std::env::var("SILLYWALK_ONESHOT").is_ok() {
        server.handle().stop(true).await;
    }

    server.await
}
