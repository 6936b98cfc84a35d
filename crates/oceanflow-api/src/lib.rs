//! DigitalOcean API client for OceanFlow
//!
//! A thin typed client over the DigitalOcean v2 REST API, covering the
//! resource families OceanFlow manages. Every method is a single HTTP
//! round trip with bearer token auth; there is no retry, rate limiting
//! or caching layer.
//!
//! # Features
//!
//! - Droplets (list, get, create, delete, resize, snapshot)
//! - Block storage volumes and volume snapshots
//! - Snapshots, images and image actions
//! - Floating IPs, load balancers, cloud firewalls
//! - Container registry (read-only)
//! - Managed Kubernetes clusters and node pools
//!
//! # Requirements
//!
//! - `DIGITALOCEAN_ACCESS_TOKEN` env var (or a token passed to [`DoClient::new`])
//!
//! # Example
//!
//! ```ignore
//! use oceanflow_api::{DoClient, ListOptions};
//!
//! let client = DoClient::from_env()?;
//!
//! // Connectivity check
//! let account = client.get_account().await?;
//! println!("authenticated as {}", account.email);
//!
//! // First page of droplets
//! let page = client.list_droplets(ListOptions::default()).await?;
//! for droplet in page.droplets {
//!     println!("{} ({})", droplet.name, droplet.status);
//! }
//! ```

pub mod account;
pub mod client;
pub mod droplets;
pub mod error;
pub mod firewalls;
pub mod floating_ips;
pub mod images;
pub mod kubernetes;
pub mod load_balancers;
pub mod registry;
pub mod snapshots;
pub mod types;
pub mod volumes;

pub use account::Account;
pub use client::DoClient;
pub use droplets::{Droplet, DropletCreateRequest, DropletPage};
pub use error::{DoError, Result};
pub use firewalls::{
    Firewall, FirewallRequest, FirewallRulesRequest, InboundRule, OutboundRule, RuleTargets,
};
pub use floating_ips::{FloatingIp, FloatingIpCreateRequest};
pub use images::Image;
pub use kubernetes::{
    KubernetesCluster, KubernetesClusterCreateRequest, KubernetesNodePool,
    KubernetesNodePoolCreateRequest,
};
pub use load_balancers::{ForwardingRule, LoadBalancer, LoadBalancerRequest};
pub use registry::{Registry, Repository, RepositoryTag};
pub use snapshots::Snapshot;
pub use types::{Action, Links, ListOptions, Meta, Region};
pub use volumes::{Volume, VolumeCreateRequest};
