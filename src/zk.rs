//! Identity and group-membership proof primitives.
//!
//! The Zekta service gates card retrieval and anonymous posting behind a
//! membership proof: the caller shows it controls a secret whose commitment
//! belongs to a server-published group, without revealing which member it is.
//! The capability surface needed for that (derive an identity, snapshot a
//! group, produce a proof bound to a signal and scope) is the [`ProofSystem`]
//! trait, so a different proof backend can be swapped in without touching any
//! client call site.
//!
//! [`Sha256System`] is the built-in backend: commitments are tagged SHA-256
//! hashes of the secret, group roots are binary Merkle roots over tagged leaf
//! hashes, and the nullifier binds (secret, scope) so a proof cannot be
//! replayed under a different scope. Whatever backend is used, the server
//! performs the actual verification; soundness is the backend's contract, not
//! re-checked here.

use rand::RngCore;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Tag for identity commitment derivation (BIP340-style tagged hash).
const IDENTITY_TAG: &str = "zekta/identity";
/// Tag for Merkle leaf hashes.
const LEAF_TAG: &str = "zekta/leaf";
/// Tag for interior Merkle nodes.
const NODE_TAG: &str = "zekta/node";
/// Tag for nullifier derivation.
const NULLIFIER_TAG: &str = "zekta/nullifier";

/// A client-side identity: a private secret and its public commitment.
///
/// The commitment is derived deterministically from the secret and is safe to
/// share; the secret never leaves the caller except inside request bodies
/// that the service explicitly treats as bearer credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    secret: String,
    commitment: String,
}

impl Identity {
    /// The private secret. Callers must retain this; it is the only way to
    /// restore the identity.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// The public commitment derived from the secret.
    pub fn commitment(&self) -> &str {
        &self.commitment
    }
}

/// A snapshot of a membership group: ordered member commitments plus the
/// derived Merkle tree depth and root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    members: Vec<String>,
    depth: u32,
    root: String,
}

impl Group {
    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn contains(&self, commitment: &str) -> bool {
        self.members.iter().any(|m| m == commitment)
    }
}

/// A membership proof, posted verbatim as the body of the service's
/// verify endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipProof {
    pub merkle_tree_depth: u32,
    pub merkle_tree_root: String,
    /// Binds (secret, scope); the server tracks nullifiers to stop replays.
    pub nullifier: String,
    /// The signal the proof commits to (a nonce or a commitment).
    pub message: String,
    /// The context the proof is valid in.
    pub scope: String,
    /// Backend-defined proof data.
    pub points: Vec<String>,
}

/// The proof capability consumed by the gift-card and posting clients.
pub trait ProofSystem {
    /// Construct an identity: a fresh random one when `secret` is `None`,
    /// otherwise a deterministic restore of a previously generated secret.
    fn identity(&self, secret: Option<&str>) -> Result<Identity>;

    /// Snapshot a group of member commitments, deriving depth and root.
    fn group(&self, members: Vec<String>) -> Result<Group>;

    /// Prove that `identity`'s commitment is a member of `group`, bound to
    /// `signal` and `scope`. Must fail if the commitment is not a member.
    fn prove(
        &self,
        identity: &Identity,
        group: &Group,
        signal: &str,
        scope: &str,
    ) -> Result<MembershipProof>;
}

/// Default proof backend built on tagged SHA-256.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256System;

impl ProofSystem for Sha256System {
    fn identity(&self, secret: Option<&str>) -> Result<Identity> {
        let secret = match secret {
            Some(s) => {
                if s.trim().is_empty() {
                    return Err(Error::InvalidSecret("secret is empty".to_string()));
                }
                s.to_string()
            }
            None => {
                let mut bytes = [0u8; 32];
                OsRng.fill_bytes(&mut bytes);
                hex::encode(bytes)
            }
        };

        let commitment = hex::encode(tagged(IDENTITY_TAG, &[secret.as_bytes()]));
        Ok(Identity { secret, commitment })
    }

    fn group(&self, members: Vec<String>) -> Result<Group> {
        if members.is_empty() {
            return Err(Error::Proof("group has no members".to_string()));
        }

        let levels = merkle_levels(&members);
        let root = hex::encode(levels.last().and_then(|l| l.first()).copied().unwrap_or_default());
        let depth = group_depth(members.len());

        Ok(Group {
            members,
            depth,
            root,
        })
    }

    fn prove(
        &self,
        identity: &Identity,
        group: &Group,
        signal: &str,
        scope: &str,
    ) -> Result<MembershipProof> {
        let index = group
            .members
            .iter()
            .position(|m| m == identity.commitment())
            .ok_or_else(|| {
                Error::Proof("identity commitment is not a member of the group".to_string())
            })?;

        let nullifier = hex::encode(tagged(
            NULLIFIER_TAG,
            &[scope.as_bytes(), identity.secret().as_bytes()],
        ));

        Ok(MembershipProof {
            merkle_tree_depth: group.depth,
            merkle_tree_root: group.root.clone(),
            nullifier,
            message: signal.to_string(),
            scope: scope.to_string(),
            points: merkle_path(&group.members, index),
        })
    }
}

/// Generate a fresh identity with the default backend.
pub fn generate() -> Result<Identity> {
    Sha256System.identity(None)
}

/// Restore an identity from a previously generated secret.
pub fn restore(secret: &str) -> Result<Identity> {
    Sha256System.identity(Some(secret))
}

/// Derive the commitment for a secret without keeping the identity around.
pub fn commitment_of(secret: &str) -> Result<String> {
    Ok(restore(secret)?.commitment().to_string())
}

/// BIP340-style tagged hash: `SHA256(SHA256(tag) || SHA256(tag) || data...)`.
fn tagged(tag: &str, parts: &[&[u8]]) -> [u8; 32] {
    let tag_hash = Sha256::digest(tag.as_bytes());
    let mut hasher = Sha256::new();
    hasher.update(tag_hash);
    hasher.update(tag_hash);
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// Tree depth for `n` members: `ceil(log2(n))`, minimum 1.
fn group_depth(n: usize) -> u32 {
    n.next_power_of_two().trailing_zeros().max(1)
}

/// All levels of the Merkle tree, leaves first. Odd nodes are paired with
/// themselves.
fn merkle_levels(members: &[String]) -> Vec<Vec<[u8; 32]>> {
    let leaves: Vec<[u8; 32]> = members
        .iter()
        .map(|m| tagged(LEAF_TAG, &[m.as_bytes()]))
        .collect();

    let mut levels = Vec::new();
    let mut current = leaves;
    while current.len() > 1 {
        let next: Vec<[u8; 32]> = current
            .chunks(2)
            .map(|pair| {
                let left = pair[0];
                let right = pair.get(1).copied().unwrap_or(left);
                tagged(NODE_TAG, &[&left, &right])
            })
            .collect();
        levels.push(current);
        current = next;
    }
    levels.push(current);
    levels
}

/// Sibling hashes from the leaf at `index` up to the root.
fn merkle_path(members: &[String], index: usize) -> Vec<String> {
    let levels = merkle_levels(members);
    let mut path = Vec::new();
    let mut position = index;

    for level in &levels[..levels.len().saturating_sub(1)] {
        let sibling = if position % 2 == 0 { position + 1 } else { position - 1 };
        let node = level.get(sibling).copied().unwrap_or(level[position]);
        path.push(hex::encode(node));
        position /= 2;
    }

    path
}
