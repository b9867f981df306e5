//! HTTPS transport for API server requests.
//!
//! Builds a pooled hyper client per cluster. Server certificates are checked
//! against the configured CA bundle when present, otherwise against the
//! bundled web PKI roots.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use bytes::Bytes;
use http_body_util::Empty;
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use rustls_pki_types::CertificateDer;
use rustls_pki_types::pem::PemObject;

pub type ApiClient = Client<HttpsConnector<HttpConnector>, Empty<Bytes>>;

/// Get the crypto provider for TLS connections.
///
/// Uses the process-wide default when one is installed, otherwise an
/// aws-lc-rs provider that is not installed globally.
fn crypto_provider() -> Arc<rustls::crypto::CryptoProvider> {
    rustls::crypto::CryptoProvider::get_default()
        .cloned()
        .unwrap_or_else(|| Arc::new(rustls::crypto::aws_lc_rs::default_provider()))
}

/// Build a rustls `ClientConfig` trusting only the certificates in `ca_path`.
fn ca_bundle_client_config(ca_path: &Path) -> anyhow::Result<rustls::ClientConfig> {
    let certs: Vec<CertificateDer<'static>> = CertificateDer::pem_file_iter(ca_path)
        .with_context(|| format!("failed to open CA bundle {}", ca_path.display()))?
        .collect::<Result<_, _>>()
        .with_context(|| format!("failed to parse CA bundle {}", ca_path.display()))?;

    let mut root_store = rustls::RootCertStore::empty();
    let (added, ignored) = root_store.add_parsable_certificates(certs);
    if ignored > 0 {
        tracing::warn!(
            added,
            ignored,
            path = %ca_path.display(),
            "some CA certificates could not be parsed"
        );
    }
    anyhow::ensure!(
        added > 0,
        "CA bundle {} contains no usable certificates",
        ca_path.display()
    );

    let config = rustls::ClientConfig::builder_with_provider(crypto_provider())
        .with_safe_default_protocol_versions()
        .context("failed to set TLS protocol versions")?
        .with_root_certificates(root_store)
        .with_no_client_auth();
    Ok(config)
}

/// Build the API client.
///
/// # Errors
///
/// Returns an error if the CA bundle cannot be loaded or TLS setup fails.
pub fn build_client(
    ca_path: Option<&Path>,
    allow_insecure_http: bool,
) -> anyhow::Result<ApiClient> {
    let builder = match ca_path {
        Some(path) => HttpsConnectorBuilder::new().with_tls_config(ca_bundle_client_config(path)?),
        None => HttpsConnectorBuilder::new()
            .with_provider_and_webpki_roots(crypto_provider())
            .context("failed to initialize TLS roots")?,
    };

    let connector = if allow_insecure_http {
        tracing::warn!("insecure HTTP enabled for API server access; use only for testing");
        builder.https_or_http().enable_http1().build()
    } else {
        builder.https_only().enable_http1().build()
    };

    Ok(Client::builder(TokioExecutor::new()).build(connector))
}
