//! Engine configuration and domain setup

use core::fmt;

use ecgost_algorithms::ec::{find_base_point, Curve, CurveGroup, DomainParameters, Subgroup, SubgroupMode};
use ecgost_algorithms::hash::BlockHash;
use ecgost_api::{Narrator, StyleHint};
use ecgost_common::random::{choice_from, uniform_int};
use ecgost_params::traditional::gost::{
    CurveDomain, COEFFICIENT_MAX, COEFFICIENT_MIN, DEFAULT_MESSAGE, MAX_DOMAIN_ATTEMPTS,
    MIN_RANDOM_SUBGROUP_ORDER, SIGN_RETRY_LIMIT, SMALL_PRIMES,
};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use super::{GostSigner, PrivateKey, PublicKey};
use crate::error::{Error, Result};

/// How verification step 6 obtains `C = z1·P + z2·Q`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerifyStrategy {
    /// Two scalar multiplications and one addition
    #[default]
    LinearCombination,
    /// Look up `(z1 + z2·d) mod q` in the materialized subgroup table
    ///
    /// Uses the private key, so only an engine holding `d` can verify this
    /// way. Requires [`SubgroupMode::Materialize`].
    SubgroupLookup,
}

pub(crate) struct EngineConfig {
    pub(crate) hash: BlockHash,
    pub(crate) verify_strategy: VerifyStrategy,
    pub(crate) retry_limit: u32,
    pub(crate) message: String,
}

/// Builder for [`GostSigner`]
///
/// Anything left unset is chosen at random (domain, key) or defaulted.
pub struct GostBuilder {
    modulus: Option<i64>,
    coefficients: Option<(i64, i64)>,
    private_key: Option<u64>,
    subgroup_mode: SubgroupMode,
    narrator: Option<Box<dyn Narrator>>,
    config: EngineConfig,
}

fn default_narrator() -> Box<dyn Narrator> {
    #[cfg(feature = "trace")]
    {
        Box::new(ecgost_api::TracingNarrator)
    }
    #[cfg(not(feature = "trace"))]
    {
        Box::new(ecgost_api::SilentNarrator)
    }
}

impl GostBuilder {
    /// Everything random, default hash and strategy
    pub fn new() -> Self {
        GostBuilder {
            modulus: None,
            coefficients: None,
            private_key: None,
            subgroup_mode: SubgroupMode::BasePointOnly,
            narrator: None,
            config: EngineConfig {
                hash: BlockHash::default(),
                verify_strategy: VerifyStrategy::default(),
                retry_limit: SIGN_RETRY_LIMIT,
                message: DEFAULT_MESSAGE.to_owned(),
            },
        }
    }

    /// Fix the field modulus `p`
    pub fn modulus(mut self, p: i64) -> Self {
        self.modulus = Some(p);
        self
    }

    /// Fix the curve coefficients `a` and `b`
    pub fn coefficients(mut self, a: i64, b: i64) -> Self {
        self.coefficients = Some((a, b));
        self
    }

    /// Fix `p`, `a` and `b` from a parameter table entry
    pub fn domain(self, domain: CurveDomain) -> Self {
        self.modulus(domain.p).coefficients(domain.a, domain.b)
    }

    /// Fix the private key `d`; must end up in `[1, q-1]`
    pub fn private_key(mut self, d: u64) -> Self {
        self.private_key = Some(d);
        self
    }

    /// Select the hash function variant
    pub fn hash(mut self, hash: BlockHash) -> Self {
        self.config.hash = hash;
        self
    }

    /// Choose whether the whole subgroup is built up front
    pub fn subgroup_mode(mut self, mode: SubgroupMode) -> Self {
        self.subgroup_mode = mode;
        self
    }

    /// Choose how verification computes `C`
    pub fn verify_strategy(mut self, strategy: VerifyStrategy) -> Self {
        self.config.verify_strategy = strategy;
        self
    }

    /// Maximum ephemeral scalars drawn per signature
    pub fn retry_limit(mut self, attempts: u32) -> Self {
        self.config.retry_limit = attempts;
        self
    }

    /// Message bound to the engine before anything is signed
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.config.message = message.into();
        self
    }

    /// Where step-by-step narration goes
    pub fn narrator(mut self, narrator: impl Narrator + 'static) -> Self {
        self.narrator = Some(Box::new(narrator));
        self
    }

    /// Build with a `ChaCha20Rng` seeded from OS entropy
    pub fn build(self) -> Result<GostSigner<ChaCha20Rng>> {
        self.build_with_rng(ChaCha20Rng::from_entropy())
    }

    /// Build with the given random generator
    ///
    /// The generator draws any unset domain values, the private key if unset,
    /// and every ephemeral scalar afterwards.
    pub fn build_with_rng<R: RngCore>(mut self, mut rng: R) -> Result<GostSigner<R>> {
        if self.config.retry_limit == 0 {
            return Err(Error::InvalidParameter(
                "retry limit must be at least 1".to_owned(),
            ));
        }
        if self.config.verify_strategy == VerifyStrategy::SubgroupLookup
            && self.subgroup_mode != SubgroupMode::Materialize
        {
            return Err(Error::InvalidParameter(
                "subgroup lookup verification requires a materialized subgroup".to_owned(),
            ));
        }

        let narrator = self.narrator.take().unwrap_or_else(default_narrator);

        narrator.narrate(format_args!("Choosing domain parameters"), StyleHint::Heading);
        let (group, domain, mut subgroup) = self.select_domain(&mut rng, narrator.as_ref())?;
        narrator.narrate(
            format_args!(
                "p = {}, a = {}, b = {}, m = {}, q = {}, P = {}",
                domain.p,
                domain.a,
                domain.b,
                domain.m,
                domain.q,
                subgroup.base()
            ),
            StyleHint::Detail,
        );

        narrator.narrate(format_args!("Generating key pair"), StyleHint::Heading);
        let q = domain.q;
        let d = match self.private_key {
            Some(d) => d,
            None => uniform_int(&mut rng, 1, q - 1).ok_or_else(|| Error::KeyGeneration {
                algorithm: super::ALGORITHM,
                details: format!("no private key range for q = {}", q),
            })?,
        };
        let private_key = PrivateKey::new(d, q)?;
        let curve = *group.curve();
        let public_key = PublicKey::new(subgroup.point_at(&curve, private_key.value())?);

        tracing::info!(p = domain.p, q, public_key = %public_key.point(), "key pair fixed");
        narrator.narrate(format_args!("{}", public_key), StyleHint::Detail);

        Ok(GostSigner::from_parts(
            group,
            domain,
            subgroup,
            private_key,
            public_key,
            self.config,
            narrator,
            rng,
        ))
    }

    fn select_domain<R: RngCore>(
        &self,
        rng: &mut R,
        narrator: &dyn Narrator,
    ) -> Result<(CurveGroup, DomainParameters, Subgroup)> {
        if let Some(p) = self.modulus {
            Curve::validate_modulus(p)?;
        }

        let randomized = self.modulus.is_none() || self.coefficients.is_none();
        let attempts = if randomized { MAX_DOMAIN_ATTEMPTS } else { 1 };
        let mut last_error = None;

        for attempt in 1..=attempts {
            let p = match self.modulus {
                Some(p) => p,
                None => *choice_from(rng, &SMALL_PRIMES)
                    .ok_or_else(|| Error::Internal("prime table is empty".to_owned()))?,
            };
            let (a, b) = match self.coefficients {
                Some(ab) => ab,
                None => {
                    let a = uniform_int(rng, COEFFICIENT_MIN, COEFFICIENT_MAX);
                    let b = uniform_int(rng, COEFFICIENT_MIN, COEFFICIENT_MAX);
                    a.zip(b).ok_or_else(|| {
                        Error::Internal("coefficient range is empty".to_owned())
                    })?
                }
            };
            narrator.narrate(
                format_args!("Attempt {}: p = {}, a = {}, b = {}", attempt, p, a, b),
                StyleHint::Step,
            );

            match self.try_domain(p, a, b, randomized) {
                Ok(found) => return Ok(found),
                Err(err) if randomized => {
                    tracing::debug!(attempt, p, a, b, error = %err, "redrawing domain");
                    last_error = Some(err);
                }
                Err(err) => return Err(err),
            }
        }

        Err(Error::Domain {
            context: "random domain",
            details: match last_error {
                Some(err) => format!("no usable domain after {} attempts ({})", attempts, err),
                None => format!("no usable domain after {} attempts", attempts),
            },
        })
    }

    fn try_domain(
        &self,
        p: i64,
        a: i64,
        b: i64,
        randomized: bool,
    ) -> Result<(CurveGroup, DomainParameters, Subgroup)> {
        let group = CurveGroup::build(Curve::new(p, a, b)?)?;
        let domain = group.domain_parameters()?;
        if randomized && domain.q < MIN_RANDOM_SUBGROUP_ORDER {
            return Err(Error::Domain {
                context: "random domain",
                details: format!("subgroup order {} is too small", domain.q),
            });
        }
        let subgroup = find_base_point(group.curve(), group.points(), domain.q, self.subgroup_mode)?;
        Ok((group, domain, subgroup))
    }
}

impl Default for GostBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GostBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GostBuilder")
            .field("modulus", &self.modulus)
            .field("coefficients", &self.coefficients)
            .field("private_key", &self.private_key.map(|_| "[REDACTED]"))
            .field("subgroup_mode", &self.subgroup_mode)
            .field("hash", &self.config.hash)
            .field("verify_strategy", &self.config.verify_strategy)
            .field("retry_limit", &self.config.retry_limit)
            .finish_non_exhaustive()
    }
}
