//! TLS transport for certificate inspection
//!
//! Performs a TLS handshake with certificate verification disabled and
//! returns the peer chain. Only metadata is read from the chain, so untrusted,
//! self-signed and expired certificates must still complete the handshake.
//! This transport is never used for anything trust-sensitive.

use crate::utils::InspectError;
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{ClientConfig, DigitallySignedStruct, Error as RustlsError, SignatureScheme};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;

/// A certificate verifier that accepts any certificate.
#[derive(Debug)]
struct AcceptAnyCertVerifier;

impl ServerCertVerifier for AcceptAnyCertVerifier {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> Result<ServerCertVerified, RustlsError> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, RustlsError> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn verify_tls13_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, RustlsError> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        vec![
            SignatureScheme::RSA_PKCS1_SHA256,
            SignatureScheme::RSA_PKCS1_SHA384,
            SignatureScheme::RSA_PKCS1_SHA512,
            SignatureScheme::ECDSA_NISTP256_SHA256,
            SignatureScheme::ECDSA_NISTP384_SHA384,
            SignatureScheme::ECDSA_NISTP521_SHA512,
            SignatureScheme::RSA_PSS_SHA256,
            SignatureScheme::RSA_PSS_SHA384,
            SignatureScheme::RSA_PSS_SHA512,
            SignatureScheme::ED25519,
            SignatureScheme::ED448,
        ]
    }
}

/// Fetches peer certificate chains without verifying them
#[derive(Clone)]
pub struct ChainFetcher {
    connector: TlsConnector,
    timeout: Duration,
}

impl ChainFetcher {
    /// Create a fetcher whose connect and handshake share one `timeout`
    pub fn new(timeout: Duration) -> Self {
        // Ensure a default crypto provider is installed
        let _ = rustls::crypto::ring::default_provider().install_default();

        let config = ClientConfig::builder()
            .dangerous()
            .with_custom_certificate_verifier(Arc::new(AcceptAnyCertVerifier))
            .with_no_client_auth();

        Self {
            connector: TlsConnector::from(Arc::new(config)),
            timeout,
        }
    }

    /// Handshake with `host:port` and return the DER chain in the order the
    /// server sent it (leaf first).
    pub async fn fetch(&self, host: &str, port: u16) -> Result<Vec<Vec<u8>>, InspectError> {
        tokio::time::timeout(self.timeout, self.handshake(host, port))
            .await
            .map_err(|_| InspectError::Connection {
                host: host.to_string(),
                message: format!("timed out after {}s", self.timeout.as_secs()),
            })?
    }

    async fn handshake(&self, host: &str, port: u16) -> Result<Vec<Vec<u8>>, InspectError> {
        let server_name =
            ServerName::try_from(host.to_string()).map_err(|_| InspectError::Connection {
                host: host.to_string(),
                message: "invalid server name".to_string(),
            })?;

        let stream =
            TcpStream::connect((host, port))
                .await
                .map_err(|e| InspectError::Connection {
                    host: host.to_string(),
                    message: e.to_string(),
                })?;

        let mut tls_stream = self
            .connector
            .connect(server_name, stream)
            .await
            .map_err(|e| InspectError::Connection {
                host: host.to_string(),
                message: format!("TLS handshake failed: {}", e),
            })?;

        let (_, client_connection) = tls_stream.get_ref();
        let chain: Vec<Vec<u8>> = client_connection
            .peer_certificates()
            .map(|certs| certs.iter().map(|c| c.as_ref().to_vec()).collect())
            .unwrap_or_default();

        // close_notify; the chain is already in hand so a failed shutdown is irrelevant
        if let Err(e) = tls_stream.shutdown().await {
            tracing::debug!("TLS shutdown with {} failed: {}", host, e);
        }

        Ok(chain)
    }
}
