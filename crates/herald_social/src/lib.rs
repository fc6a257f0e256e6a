//! X (Twitter) distribution for herald.
//!
//! Three layers, each usable on its own:
//!
//! - [`weighted_len`]: the platform's length metric. Wide-script characters
//!   and emoji cost two units, everything else one, and every URL a flat 23.
//! - [`TweetComposer`]: renders a [`ContentArtifact`](herald_core::ContentArtifact)
//!   into a post that fits the weighted budget, sacrificing the description
//!   first.
//! - [`OAuthSigner`] and [`XClient`]: OAuth 1.0a (HMAC-SHA1) signed
//!   `POST /2/tweets`, behind the [`Distributor`] trait.
//!
//! ```no_run
//! use herald_social::{Distributor, OAuthCredentials, OAuthSigner, XClient, X_TWEETS_URL};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let signer = OAuthSigner::new(OAuthCredentials::from_env()?);
//! let client = XClient::new(signer, X_TWEETS_URL);
//! let id = client.post("🎯 1100회 당첨번호 분석").await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod composer;
mod oauth;
mod weight;

pub use client::{Distributor, X_TWEETS_URL, XClient};
pub use composer::{DEFAULT_EMOJI, TweetComposer};
pub use oauth::{OAuthCredentials, OAuthSigner, percent_encode, signature_base_string};
pub use weight::{URL_WEIGHT, char_weight, weighted_len};
