//! Development server.
//!
//! Builds the site once, then serves the output directory. Two requests are
//! answered dynamically instead of from disk:
//!
//! ```text
//! POST /api/contact         contact form validation, JSON in and out
//! GET  /{L}/blog/?q=...     blog listing filtered by a search query
//! ```
//!
//! # Module Structure
//!
//! ```text
//! serve/
//! ├── lifecycle.rs   # port binding with retry, shutdown wait
//! ├── path.rs        # URL splitting, query params, file resolution
//! ├── response.rs    # file, html, json and error responses
//! └── mod.rs         # request loop and routing (this file)
//! ```

mod lifecycle;
mod path;
mod response;

use crate::{
    cli::build::build_site,
    config::SiteConfig,
    contact::{CONTACT_ENDPOINT, ContactForm},
    core::{is_serving, is_shutdown, set_serving},
    debug, log,
    render::{Route, Site, pages},
    utils::slug::slugify,
};
use anyhow::{Context, Result};
use serde_json::json;
use std::{io::Read, sync::Arc, thread};
use tiny_http::{Method, Request, Server};

/// Upper bound for a contact form body.
const MAX_BODY_BYTES: u64 = 64 * 1024;

/// Number of request handler threads.
const REQUEST_THREADS: usize = 4;

/// Build the site and serve it until Ctrl+C.
pub fn serve_site(config: SiteConfig) -> Result<()> {
    let interface = config.serve.interface;
    let port = config.serve.port;

    let site = Arc::new(build_site(config, false)?);

    let (server, addr) = lifecycle::bind_with_retry(interface, port)?;
    let server = Arc::new(server);

    let (shutdown_tx, shutdown_rx) = crossbeam::channel::bounded(1);
    lifecycle::register_server_for_shutdown(Arc::clone(&server), shutdown_tx);
    set_serving(true);

    log!("serve"; "http://{}/", addr);

    let handle = {
        let server = Arc::clone(&server);
        let site = Arc::clone(&site);
        thread::spawn(move || run_request_loop(&server, &site))
    };

    lifecycle::wait_for_shutdown(&shutdown_rx, handle);
    set_serving(false);
    Ok(())
}

fn run_request_loop(server: &Server, site: &Arc<Site>) {
    let pool = match rayon::ThreadPoolBuilder::new()
        .num_threads(REQUEST_THREADS)
        .thread_name(|i| format!("serve-{i}"))
        .build()
    {
        Ok(pool) => pool,
        Err(e) => {
            log!("error"; "failed to start request pool: {}", e);
            return;
        }
    };

    for request in server.incoming_requests() {
        if is_shutdown() || !is_serving() {
            let _ = response::respond_unavailable(request);
            break;
        }

        let site = Arc::clone(site);
        pool.spawn(move || {
            let url = request.url().to_string();
            if let Err(e) = handle_request(request, &site) {
                log!("serve"; "{}: {:#}", url, e);
            }
        });
    }
}

fn handle_request(request: Request, site: &Site) -> Result<()> {
    let (path, query) = path::split_url(request.url());
    let query = query.map(str::to_owned);
    debug!("serve"; "{} {}", request.method(), request.url());

    if path == CONTACT_ENDPOINT {
        return match request.method() {
            Method::Post => handle_contact(request, site),
            _ => response::respond_method_not_allowed(request, "POST"),
        };
    }

    if !matches!(request.method(), Method::Get | Method::Head) {
        return response::respond_method_not_allowed(request, "GET, HEAD");
    }

    if let Some(html) = render_search(site, &path, query.as_deref()) {
        return response::respond_html(request, html);
    }

    let output = &site.config.build.output;
    match path::resolve_path(&path, output) {
        Some(file) => response::respond_file(request, &file),
        None => response::respond_not_found(request, output),
    }
}

/// Validate a contact submission against the submitter's locale.
fn handle_contact(mut request: Request, site: &Site) -> Result<()> {
    let mut body = Vec::new();
    request
        .as_reader()
        .take(MAX_BODY_BYTES)
        .read_to_end(&mut body)
        .context("Failed to read request body")?;

    let form: ContactForm = match serde_json::from_slice(&body) {
        Ok(form) => form,
        Err(e) => {
            return response::respond_json(request, 400, &json!({ "error": e.to_string() }));
        }
    };

    let locale = site.routing.resolve(form.locale.as_deref());
    match form.validate(site.catalog(locale)) {
        Ok(()) => {
            log!("contact"; "message from {} <{}>", form.name.trim(), form.email.trim());
            response::respond_json(request, 200, &json!({ "ok": true }))
        }
        Err(errors) => response::respond_json(request, 422, &json!({ "errors": errors })),
    }
}

/// Render a blog listing for a `?q=` search; `None` when the request is not one.
fn render_search(site: &Site, path: &str, query: Option<&str>) -> Option<String> {
    let search = path::query_param(query, "q")?;
    let (locale, rest) = site.routing.split_path(path)?;

    let tag = match rest.strip_prefix("/blog/tag/") {
        Some(slug) => {
            let slug = slug.trim_end_matches('/');
            Some(
                site.content
                    .posts
                    .tags()
                    .into_iter()
                    .find(|tag| slugify(tag) == slug)?,
            )
        }
        None if rest == Route::Blog.path() => None,
        None => return None,
    };

    let ctx = site.context(locale);
    Some(pages::blog::render(&ctx, search.trim(), tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::site;

    #[test]
    fn test_render_search_filters_listing() {
        let site = site();
        let html = render_search(&site, "/en/blog/", Some("q=binary")).unwrap();
        assert!(html.contains("binary-basics"));

        let html = render_search(&site, "/en/blog/", Some("q=nothing-matches")).unwrap();
        assert!(!html.contains("binary-basics"));
    }

    #[test]
    fn test_render_search_by_tag_path() {
        let site = site();
        let html = render_search(&site, "/en/blog/tag/programming/", Some("q=binary"));
        assert!(html.is_some());
        assert!(render_search(&site, "/en/blog/tag/unknown/", Some("q=binary")).is_none());
    }

    #[test]
    fn test_render_search_ignores_other_requests() {
        let site = site();
        assert!(render_search(&site, "/en/blog/", None).is_none());
        assert!(render_search(&site, "/en/projects/", Some("q=x")).is_none());
        assert!(render_search(&site, "/fr/blog/", Some("q=x")).is_none());
    }
}
