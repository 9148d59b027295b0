//! Compiled front end, embedded in the binary at build time.
//!
//! Client-side routes (paths without an extension) get `index.html`; a
//! missing asset is a 404 so the browser never parses HTML as a script.

use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir, File};
use log::debug;
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

/// What a request path maps to inside the bundle.
#[derive(Debug, PartialEq, Eq)]
enum Lookup<'a> {
    Asset(&'a str),
    AppShell,
    Missing,
}

fn lookup<'a>(path: &'a str, exists: impl Fn(&str) -> bool) -> Lookup<'a> {
    let path = path.trim_start_matches('/');
    if path.is_empty() || path == INDEX {
        return Lookup::AppShell;
    }
    if exists(path) {
        return Lookup::Asset(path);
    }
    let file_name = path.rsplit('/').next().unwrap_or(path);
    if file_name.contains('.') {
        Lookup::Missing
    } else {
        Lookup::AppShell
    }
}

/// Trunk fingerprints every asset name; only the shell must be revalidated.
fn cache_directives(lookup: &Lookup<'_>) -> Vec<CacheDirective> {
    match lookup {
        Lookup::Asset(_) => vec![
            CacheDirective::Public,
            CacheDirective::MaxAge(31_536_000),
            CacheDirective::Extension("immutable".into(), None),
        ],
        _ => vec![CacheDirective::NoCache],
    }
}

fn file_response(file: &File<'_>, content_type: &str, lookup: &Lookup<'_>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(content_type)
        .insert_header(CacheControl(cache_directives(lookup)))
        .body(file.contents().to_vec())
}

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let found = lookup(req.path(), |path| STATIC_DIR.get_file(path).is_some());
    match found {
        Lookup::Asset(path) => match STATIC_DIR.get_file(path) {
            Some(file) => {
                let mime = from_path(path).first_or_octet_stream();
                file_response(file, mime.as_ref(), &found)
            }
            None => HttpResponse::NotFound().finish(),
        },
        Lookup::AppShell => match STATIC_DIR.get_file(INDEX) {
            Some(index) => file_response(index, "text/html; charset=utf-8", &found),
            None => HttpResponse::NotFound().body("Front end no compilado (falta frontend/dist)"),
        },
        Lookup::Missing => {
            debug!("recurso inexistente: {}", req.path());
            HttpResponse::NotFound().finish()
        }
    }
}
