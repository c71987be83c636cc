//! Random graph models.
//!
//! Each model is a plain parameter set with a `generate` method that builds a [`Graph`] from an
//! injected random source, so a seeded generator reproduces the same graph. [`Model`] wraps the
//! three of them for callers that pick the model at runtime.

use std::{fmt, str::FromStr};

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{error::ModelError, graph::Graph};

mod erdos_renyi;
mod scale_free;
mod watts_strogatz;

pub use erdos_renyi::ErdosRenyi;
pub use scale_free::{preferential_target, ScaleFree};
pub use watts_strogatz::{rewire_target, WattsStrogatz};

/// The supported models, identified by their short codes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ModelKind {
    /// `ER`, see [`ErdosRenyi`].
    ErdosRenyi,
    /// `WS`, see [`WattsStrogatz`].
    WattsStrogatz,
    /// `SF`, see [`ScaleFree`].
    ScaleFree,
}

impl ModelKind {
    /// Returns the model's short code.
    pub fn code(self) -> &'static str {
        match self {
            Self::ErdosRenyi => "ER",
            Self::WattsStrogatz => "WS",
            Self::ScaleFree => "SF",
        }
    }

    /// Returns how many numeric parameters the model takes, the node count included.
    pub fn parameter_count(self) -> usize {
        match self {
            Self::ErdosRenyi | Self::ScaleFree => 2,
            Self::WattsStrogatz => 3,
        }
    }
}

impl FromStr for ModelKind {
    type Err = ModelError;

    /// Parses a short code, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use randnet::generators::ModelKind;
    ///
    /// assert_eq!("ws".parse(), Ok(ModelKind::WattsStrogatz));
    /// assert!("BA".parse::<ModelKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ER" => Ok(Self::ErdosRenyi),
            "WS" => Ok(Self::WattsStrogatz),
            "SF" => Ok(Self::ScaleFree),
            _ => Err(ModelError::UnknownModel(s.to_owned())),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One of the models together with its parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Model {
    ErdosRenyi(ErdosRenyi),
    WattsStrogatz(WattsStrogatz),
    ScaleFree(ScaleFree),
}

impl Model {
    /// Returns which model this is.
    pub fn kind(&self) -> ModelKind {
        match self {
            Self::ErdosRenyi(_) => ModelKind::ErdosRenyi,
            Self::WattsStrogatz(_) => ModelKind::WattsStrogatz,
            Self::ScaleFree(_) => ModelKind::ScaleFree,
        }
    }

    /// Returns the model's short code, `ER`, `WS` or `SF`.
    pub fn name(&self) -> &'static str {
        self.kind().code()
    }

    /// Returns the number of nodes the model builds.
    pub fn nodes(&self) -> usize {
        match self {
            Self::ErdosRenyi(model) => model.nodes,
            Self::WattsStrogatz(model) => model.nodes,
            Self::ScaleFree(model) => model.nodes,
        }
    }

    /// Builds a graph from the given random source.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Graph, ModelError> {
        match self {
            Self::ErdosRenyi(model) => model.generate(rng),
            Self::WattsStrogatz(model) => model.generate(rng),
            Self::ScaleFree(model) => model.generate(rng),
        }
    }

    /// Builds a graph from a [`SmallRng`] seeded with `seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use randnet::generators::{Model, ScaleFree};
    ///
    /// let model = Model::from(ScaleFree::new(50, 2));
    ///
    /// assert_eq!(model.generate_seeded(3), model.generate_seeded(3));
    /// ```
    pub fn generate_seeded(&self, seed: u64) -> Result<Graph, ModelError> {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }
}

impl From<ErdosRenyi> for Model {
    fn from(model: ErdosRenyi) -> Self {
        Self::ErdosRenyi(model)
    }
}

impl From<WattsStrogatz> for Model {
    fn from(model: WattsStrogatz) -> Self {
        Self::WattsStrogatz(model)
    }
}

impl From<ScaleFree> for Model {
    fn from(model: ScaleFree) -> Self {
        Self::ScaleFree(model)
    }
}
