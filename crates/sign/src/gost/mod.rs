//! GOST R 34.10-2012 style signatures over a small prime field
//!
//! The engine owns one domain `(p, a, b, m, q)`, a base point `P` of order
//! `q`, a key pair `(d, Q = d·P)` and the subgroup table of `P`.
//!
//! Signing (`ζ = r‖s`):
//! 1. message → bits → `l`-bit blocks, `l = bitLength(q)`
//! 2. `a = hash(blocks)`, `e = a mod q` (1 if zero)
//! 3. draw `k ∈ [1, q-1]`, compute `kP`
//! 4. `r = x(kP) mod q`; redraw if zero
//! 5. `s = (r·d + k·e) mod q`; redraw if zero
//! 6. `ζ = bin_l(r) ‖ bin_l(s)`
//!
//! Verification:
//! 1. split `ζ`, require `0 < r, s < q`
//! 2. recompute the hash of the bound message
//! 3. `e = a mod q` (1 if zero)
//! 4. `v = e⁻¹ mod q`
//! 5. `z1 = s·v`, `z2 = -r·v (mod q)`
//! 6. `C = z1·P + z2·Q`, `R = x(C) mod q`
//! 7. accept iff `R = r`

use core::fmt;

use ecgost_algorithms::ec::{Curve, CurveGroup, DomainParameters, Point, Subgroup};
use ecgost_algorithms::hash::{message_blocks, BlockHash};
use ecgost_api::{Error as ApiError, Narrator, Result as ApiResult, SignatureScheme, StyleHint};
use ecgost_common::math_common::mod_inv;
use ecgost_common::random::uniform_int;
use rand::RngCore;
use rand_chacha::ChaCha20Rng;
use subtle::ConstantTimeEq;

use crate::error::{Error, Result};

mod builder;
mod context;
mod keys;
mod signature;
mod state;

pub use builder::{GostBuilder, VerifyStrategy};
pub use context::{SigningContext, VerificationContext};
pub use keys::{PrivateKey, PublicKey};
pub use signature::SignatureBits;
pub use state::EngineState;

pub(crate) const ALGORITHM: &str = "GOST R 34.10-2012";

/// `(a·b + c·d) mod q` without intermediate overflow
fn mul_add_mod(a: u64, b: u64, c: u64, d: u64, q: u64) -> u64 {
    ((a as u128 * b as u128 + c as u128 * d as u128) % q as u128) as u64
}

fn reject(step: u8, details: impl Into<String>) -> Error {
    Error::Rejected {
        step,
        details: details.into(),
    }
}

/// The signature engine
///
/// Built by [`GostSigner::builder`] or [`GostSigner::new`]; construction
/// either yields a fully initialised engine or an error. The domain, base
/// point and key pair are fixed for the engine's lifetime. The subgroup table
/// only grows as new multiples of `P` are computed.
pub struct GostSigner<R = ChaCha20Rng> {
    group: CurveGroup,
    domain: DomainParameters,
    subgroup: Subgroup,
    private_key: PrivateKey,
    public_key: PublicKey,
    hash: BlockHash,
    verify_strategy: VerifyStrategy,
    retry_limit: u32,
    message: String,
    narrator: Box<dyn Narrator>,
    rng: R,
    state: EngineState,
    signature: Option<SignatureBits>,
    last_signing: Option<SigningContext>,
    last_verification: Option<VerificationContext>,
}

impl GostSigner<ChaCha20Rng> {
    /// Start configuring an engine
    pub fn builder() -> GostBuilder {
        GostBuilder::new()
    }

    /// Build an engine for `(p, a, b)`, drawing whatever is omitted
    ///
    /// An omitted `p` is drawn from the prime table; unless both `a` and `b`
    /// are given, both are drawn from the coefficient range.
    pub fn new(p: Option<i64>, a: Option<i64>, b: Option<i64>) -> Result<Self> {
        let mut builder = GostBuilder::new();
        if let Some(p) = p {
            builder = builder.modulus(p);
        }
        if let (Some(a), Some(b)) = (a, b) {
            builder = builder.coefficients(a, b);
        }
        builder.build()
    }
}

impl<R: RngCore> GostSigner<R> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        group: CurveGroup,
        domain: DomainParameters,
        subgroup: Subgroup,
        private_key: PrivateKey,
        public_key: PublicKey,
        config: builder::EngineConfig,
        narrator: Box<dyn Narrator>,
        rng: R,
    ) -> Self {
        GostSigner {
            group,
            domain,
            subgroup,
            private_key,
            public_key,
            hash: config.hash,
            verify_strategy: config.verify_strategy,
            retry_limit: config.retry_limit,
            message: config.message,
            narrator,
            rng,
            state: EngineState::KeysSet,
            signature: None,
            last_signing: None,
            last_verification: None,
        }
    }

    fn say(&self, style: StyleHint, message: fmt::Arguments<'_>) {
        self.narrator.narrate(message, style);
    }

    /// Domain parameters `(p, a, b, m, q)`
    pub fn domain(&self) -> &DomainParameters {
        &self.domain
    }

    /// The curve `y² = x³ + a·x + b` over `GF(p)`
    pub fn curve(&self) -> &Curve {
        self.group.curve()
    }

    /// Enumerated curve points and group order
    pub fn curve_group(&self) -> &CurveGroup {
        &self.group
    }

    /// Subgroup table of the base point
    pub fn subgroup(&self) -> &Subgroup {
        &self.subgroup
    }

    /// Base point `P`
    pub fn base_point(&self) -> &Point {
        self.subgroup.base()
    }

    /// Public key `Q = d·P`
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Hash variant in use
    pub fn hash_function(&self) -> BlockHash {
        self.hash
    }

    /// Verification strategy in use
    pub fn verify_strategy(&self) -> VerifyStrategy {
        self.verify_strategy
    }

    /// Message that [`GostSigner::verify`] checks against
    pub fn bound_message(&self) -> &str {
        &self.message
    }

    /// Current lifecycle state
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Most recent signature this engine produced
    ///
    /// Failed signing runs leave it untouched.
    pub fn last_signature(&self) -> Option<&SignatureBits> {
        self.signature.as_ref()
    }

    /// Context of the most recent signing run, successful or not
    pub fn last_signing(&self) -> Option<&SigningContext> {
        self.last_signing.as_ref()
    }

    /// Context of the most recent verification run
    pub fn last_verification(&self) -> Option<&VerificationContext> {
        self.last_verification.as_ref()
    }

    /// Signature width `l = bitLength(q)`
    pub fn signature_width(&self) -> u32 {
        self.domain.signature_width()
    }

    /// `k·P`, cached in the subgroup table
    pub fn point_multiple(&mut self, k: u64) -> Result<Point> {
        let curve = *self.group.curve();
        Ok(self.subgroup.point_at(&curve, k)?)
    }

    /// Sign `message` with a freshly drawn ephemeral scalar
    ///
    /// Up to the retry limit of scalars are drawn; each attempt that gives
    /// `r = 0` or `s = 0` is discarded. The message becomes the one
    /// [`GostSigner::verify`] checks against.
    pub fn sign(&mut self, message: &str) -> Result<SignatureBits> {
        let mut ctx = self.begin_signing(message);
        let q = self.domain.q;

        for attempt in 1..=self.retry_limit {
            ctx.attempts = attempt;
            self.state = EngineState::Signing(3);
            let k = uniform_int(&mut self.rng, 1, q - 1).ok_or_else(|| {
                Error::Internal(format!("empty ephemeral range for q = {}", q))
            })?;

            if self.attempt(&mut ctx, k)? {
                return Ok(self.finish_signing(ctx));
            }
            tracing::debug!(attempt, "signing attempt discarded");
        }

        self.say(
            StyleHint::Failure,
            format_args!("No valid (r, s) after {} attempts", self.retry_limit),
        );
        self.state = EngineState::KeysSet;
        self.last_signing = Some(ctx);
        Err(Error::SignatureGeneration {
            algorithm: ALGORITHM,
            details: format!("exceeded retry limit of {} attempts", self.retry_limit),
        })
    }

    /// Sign `message` with a caller-chosen ephemeral scalar `k ∈ [1, q-1]`
    ///
    /// Runs a single attempt: `r = 0` or `s = 0` is an error rather than a
    /// retry.
    pub fn sign_with_ephemeral(&mut self, message: &str, k: u64) -> Result<SignatureBits> {
        let q = self.domain.q;
        if k == 0 || k >= q {
            return Err(Error::InvalidParameter(format!(
                "ephemeral scalar {} is outside [1, {}]",
                k,
                q - 1
            )));
        }

        let mut ctx = self.begin_signing(message);
        ctx.attempts = 1;
        self.state = EngineState::Signing(3);
        if self.attempt(&mut ctx, k)? {
            return Ok(self.finish_signing(ctx));
        }

        self.state = EngineState::KeysSet;
        self.last_signing = Some(ctx);
        Err(Error::SignatureGeneration {
            algorithm: ALGORITHM,
            details: format!("ephemeral scalar {} gives r = 0 or s = 0", k),
        })
    }

    // Steps 1 and 2
    fn begin_signing(&mut self, message: &str) -> SigningContext {
        let q = self.domain.q;
        let width = self.signature_width();
        let mut ctx = SigningContext::new(message);

        self.say(StyleHint::Heading, format_args!("Signing message {:?}", message));

        self.state = EngineState::Signing(1);
        ctx.blocks = message_blocks(message, width);
        self.say(
            StyleHint::Step,
            format_args!("Step 1. Message as {}-bit blocks: {:?}", width, ctx.blocks),
        );

        self.state = EngineState::Signing(2);
        let digest = self.hash.digest(&ctx.blocks, q);
        ctx.e = match digest.value % q {
            0 => 1,
            e => e,
        };
        ctx.digest = Some(digest);
        self.say(
            StyleHint::Step,
            format_args!(
                "Step 2. a = {} (block sum {}), e = a mod {} = {}",
                digest.value, digest.sum, q, ctx.e
            ),
        );

        ctx
    }

    // Steps 3 to 5 for one ephemeral scalar; false means "draw again"
    fn attempt(&mut self, ctx: &mut SigningContext, k: u64) -> Result<bool> {
        let q = self.domain.q;

        let kp = self.point_multiple(k)?;
        self.say(StyleHint::Step, format_args!("Step 3. k = {}, kP = {}", k, kp));

        self.state = EngineState::Signing(4);
        let r = kp.x().rem_euclid(q as i64) as u64;
        self.say(StyleHint::Step, format_args!("Step 4. r = x(kP) mod q = {}", r));
        if r == 0 {
            self.say(StyleHint::Failure, format_args!("r = 0, drawing a new k"));
            return Ok(false);
        }

        self.state = EngineState::Signing(5);
        let s = mul_add_mod(r, self.private_key.value(), k, ctx.e, q);
        self.say(
            StyleHint::Step,
            format_args!("Step 5. s = (r·d + k·e) mod q = {}", s),
        );
        if s == 0 {
            self.say(StyleHint::Failure, format_args!("s = 0, drawing a new k"));
            return Ok(false);
        }

        ctx.k = Some(k);
        ctx.r = r;
        ctx.s = s;
        Ok(true)
    }

    // Step 6
    fn finish_signing(&mut self, mut ctx: SigningContext) -> SignatureBits {
        self.state = EngineState::Signing(6);
        let signature = SignatureBits::encode(ctx.r, ctx.s, self.signature_width());
        self.say(StyleHint::Success, format_args!("Step 6. ζ = r‖s = {}", signature));

        ctx.signature = Some(signature.clone());
        self.signature = Some(signature.clone());
        self.message = ctx.message.clone();
        self.last_signing = Some(ctx);
        self.state = EngineState::Signed;
        signature
    }

    /// Verify a signature against the bound message
    ///
    /// With `None`, re-verifies the most recent signature this engine
    /// produced; failed signing runs do not replace it. Never fails: every
    /// problem yields `false`, and the reason is kept in
    /// [`GostSigner::last_verification`].
    pub fn verify(&mut self, signature: Option<&SignatureBits>) -> bool {
        let message = self.message.clone();
        let signature = match signature {
            Some(signature) => Some(signature.clone()),
            None => self.signature.clone(),
        };

        match signature {
            Some(signature) => self.run_verification(&message, signature),
            None => {
                let mut ctx = VerificationContext::new(&message, SignatureBits::default());
                self.state = EngineState::Verifying(1);
                self.record_rejection(&mut ctx, reject(1, "no signature to verify"));
                self.last_verification = Some(ctx);
                false
            }
        }
    }

    /// Verify a signature against an explicit message
    ///
    /// Leaves the bound message unchanged.
    pub fn verify_message(&mut self, message: &str, signature: &SignatureBits) -> bool {
        self.run_verification(message, signature.clone())
    }

    fn run_verification(&mut self, message: &str, signature: SignatureBits) -> bool {
        self.say(StyleHint::Heading, format_args!("Verifying signature {}", signature));
        let mut ctx = VerificationContext::new(message, signature);

        let accepted = match self.verification_steps(&mut ctx) {
            Ok(()) => {
                self.say(StyleHint::Success, format_args!("Signature is valid"));
                self.state = EngineState::Verified;
                true
            }
            Err(err) => {
                self.record_rejection(&mut ctx, err);
                false
            }
        };

        ctx.accepted = accepted;
        self.last_verification = Some(ctx);
        accepted
    }

    fn record_rejection(&mut self, ctx: &mut VerificationContext, err: Error) {
        let err = match err {
            rejected @ Error::Rejected { .. } => rejected,
            other => reject(self.state.step().unwrap_or(0), other.to_string()),
        };
        self.say(StyleHint::Failure, format_args!("Signature is invalid: {}", err));
        tracing::debug!(error = %err, "signature rejected");
        ctx.accepted = false;
        ctx.rejection = Some(ApiError::from(err));
        self.state = EngineState::Rejected;
    }

    fn verification_steps(&mut self, ctx: &mut VerificationContext) -> Result<()> {
        let q = self.domain.q;
        let width = self.signature_width();

        // Step 1
        self.state = EngineState::Verifying(1);
        let (r, s) = ctx
            .signature
            .decode(width)
            .ok_or_else(|| reject(1, format!("signature is not {} binary digits", 2 * width)))?;
        ctx.r = Some(r);
        ctx.s = Some(s);
        self.say(StyleHint::Step, format_args!("Step 1. r = {}, s = {}", r, s));
        if !(0 < r && r < q) {
            return Err(reject(1, format!("r = {} does not satisfy 0 < r < {}", r, q)));
        }
        if !(0 < s && s < q) {
            return Err(reject(1, format!("s = {} does not satisfy 0 < s < {}", s, q)));
        }

        // Step 2
        self.state = EngineState::Verifying(2);
        let digest = self.hash.hash_message(&ctx.message, q);
        ctx.digest = Some(digest);
        self.say(StyleHint::Step, format_args!("Step 2. h(M) = {}", digest.value));

        // Step 3
        self.state = EngineState::Verifying(3);
        let e = match digest.value % q {
            0 => 1,
            e => e,
        };
        ctx.e = Some(e);
        self.say(StyleHint::Step, format_args!("Step 3. e = {}", e));

        // Step 4
        self.state = EngineState::Verifying(4);
        let v = mod_inv(e as i64, q as i64)
            .map(|v| v as u64)
            .ok_or_else(|| reject(4, format!("e = {} has no inverse mod {}", e, q)))?;
        ctx.v = Some(v);
        self.say(StyleHint::Step, format_args!("Step 4. v = e⁻¹ mod q = {}", v));

        // Step 5
        self.state = EngineState::Verifying(5);
        let z1 = mul_add_mod(s, v, 0, 0, q);
        let z2 = (q - mul_add_mod(r, v, 0, 0, q)) % q;
        ctx.z1 = Some(z1);
        ctx.z2 = Some(z2);
        self.say(StyleHint::Step, format_args!("Step 5. z1 = {}, z2 = {}", z1, z2));

        // Step 6
        self.state = EngineState::Verifying(6);
        let c = self.combine(z1, z2)?;
        ctx.point = Some(c);
        if c.is_identity() {
            return Err(reject(6, "C is the point at infinity"));
        }
        let recovered = c.x().rem_euclid(q as i64) as u64;
        ctx.recovered_r = Some(recovered);
        self.say(
            StyleHint::Step,
            format_args!("Step 6. C = {}, R = x(C) mod q = {}", c, recovered),
        );

        // Step 7
        self.state = EngineState::Verifying(7);
        if !bool::from(recovered.ct_eq(&r)) {
            return Err(reject(7, format!("R = {} differs from r = {}", recovered, r)));
        }
        Ok(())
    }

    // C = z1·P + z2·Q
    fn combine(&mut self, z1: u64, z2: u64) -> Result<Point> {
        let curve = *self.group.curve();
        match self.verify_strategy {
            VerifyStrategy::LinearCombination => {
                let first = self.subgroup.point_at(&curve, z1)?;
                let second = curve.multiply_unsigned(self.public_key.point(), z2)?;
                Ok(curve.add(&first, &second))
            }
            VerifyStrategy::SubgroupLookup => {
                let q = self.domain.q;
                let index = mul_add_mod(z2, self.private_key.value(), z1, 1, q);
                Ok(self.subgroup.lookup(index)?)
            }
        }
    }
}

impl<R: RngCore> SignatureScheme for GostSigner<R> {
    type PublicKey = PublicKey;
    type SignatureData = SignatureBits;

    fn name() -> &'static str {
        ALGORITHM
    }

    fn public_key(&self) -> PublicKey {
        self.public_key
    }

    fn sign(&mut self, message: &str) -> ApiResult<SignatureBits> {
        GostSigner::sign(self, message).map_err(ApiError::from)
    }

    fn verify(&mut self, message: &str, signature: &SignatureBits) -> bool {
        self.verify_message(message, signature)
    }
}

impl<R> fmt::Debug for GostSigner<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GostSigner")
            .field("domain", &self.domain)
            .field("base_point", self.subgroup.base())
            .field("public_key", &self.public_key)
            .field("hash", &self.hash)
            .field("verify_strategy", &self.verify_strategy)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
