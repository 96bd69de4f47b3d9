use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info, warn};

use crate::io::configuration::{DEFAULT_PRIORS, DEFAULT_REGION_HEIGHT, DEFAULT_REGION_WIDTH};
use crate::io::error::{
    AlgorithmError, ErrorContext, Result, WithContext, invalid_configuration,
};
use crate::math::bayes::{Priors, revise};
use crate::search::effectiveness::{Effectiveness, EffectivenessRange, EffectivenessVector};
use crate::search::placement::{Target, TargetPlacer};
use crate::search::simulator::{SearchOutcome, search};
use crate::session::action::Action;
use crate::session::policy::ActionSelector;
use crate::spatial::history::SearchHistory;
use crate::spatial::region::{Cell, Region, RegionId};

/// Layout and starting beliefs for a session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Width and height of areas 1, 2 and 3 in cells
    pub region_dims: [(usize, usize); 3],
    /// Starting probability that the target is in each area
    pub initial_priors: [f64; 3],
    /// Range that per-round search effectiveness is drawn from
    pub effectiveness_range: EffectivenessRange,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            region_dims: [(DEFAULT_REGION_WIDTH, DEFAULT_REGION_HEIGHT); 3],
            initial_priors: DEFAULT_PRIORS,
            effectiveness_range: EffectivenessRange::default(),
        }
    }
}

impl SessionConfig {
    /// Square areas of the given side length with default priors
    pub fn square(side: usize) -> Self {
        Self {
            region_dims: [(side, side); 3],
            ..Self::default()
        }
    }

    /// Build and validate the three areas
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or the areas differ in cell count
    pub fn regions(&self) -> Result<[Region; 3]> {
        let [(w1, h1), (w2, h2), (w3, h3)] = self.region_dims;
        let regions = [
            Region::new(RegionId::One, w1, h1)?,
            Region::new(RegionId::Two, w2, h2)?,
            Region::new(RegionId::Three, w3, h3)?,
        ];

        let area = regions[0].area();
        if regions.iter().any(|region| region.area() != area) {
            return Err(invalid_configuration(&format!(
                "search areas must hold the same number of cells, got {}, {} and {}",
                regions[0].area(),
                regions[1].area(),
                regions[2].area()
            )));
        }

        Ok(regions)
    }

    /// Validate the starting probabilities
    ///
    /// # Errors
    ///
    /// Returns an error if the priors are negative or do not sum to 1
    pub fn priors(&self) -> Result<Priors> {
        Priors::new(self.initial_priors)
    }
}

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Target placed, no round run yet
    Initialized,
    /// At least one round ran without finding the target
    RoundInProgress,
    /// A search revealed the target
    Found {
        /// Where the target was
        target: Target,
        /// Rounds it took
        rounds: usize,
    },
    /// Aborted by the operator
    Quit {
        /// Rounds completed before quitting
        rounds: usize,
    },
}

impl SessionState {
    const fn label(&self) -> &'static str {
        match self {
            Self::Initialized => "initialized",
            Self::RoundInProgress => "searching",
            Self::Found { .. } => "found",
            Self::Quit { .. } => "quit",
        }
    }
}

/// How a step ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    /// The round searched without finding the target
    NotFound,
    /// The round found the target
    Found {
        /// Area containing the target
        region: RegionId,
        /// Local cell of the target
        cell: Cell,
    },
    /// The session was replaced by a fresh one
    Restarted,
    /// The session was aborted
    Quit,
}

/// Recoverable conditions encountered during a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundWarning {
    /// The area had no unsearched cells left, so its search did nothing
    ExhaustedRegion {
        /// Exhausted area
        region: RegionId,
    },
    /// The Bayesian revision hit a zero denominator and kept the prior belief
    DegenerateUpdate,
}

/// Everything a caller needs to report one step
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    /// How the step ended
    pub status: RoundStatus,
    /// Round number within the session (0 after a restart)
    pub round: usize,
    /// Probabilities after the step
    pub priors_after: Priors,
    /// Effectiveness fed to the Bayesian revision
    pub effectiveness_used: EffectivenessVector,
    /// Cells searched this round per area
    pub cells_searched: [usize; 3],
    /// Recoverable conditions met during the round
    pub warnings: Vec<RoundWarning>,
}

impl RoundResult {
    /// The round found the target
    pub const fn found(&self) -> bool {
        matches!(self.status, RoundStatus::Found { .. })
    }

    /// Area where the target was found
    pub const fn region(&self) -> Option<RegionId> {
        match self.status {
            RoundStatus::Found { region, .. } => Some(region),
            _ => None,
        }
    }
}

/// State an action selector decides from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSnapshot {
    /// Rounds completed so far
    pub round: usize,
    /// Current probabilities
    pub priors: Priors,
    /// Areas with no unsearched cells left
    pub exhausted: [bool; 3],
}

/// How a driven session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Target found after this many rounds
    Found {
        /// Rounds it took
        rounds: usize,
    },
    /// The selector chose to quit
    Quit {
        /// Rounds completed before quitting
        rounds: usize,
    },
    /// The round cap was reached first
    Unresolved {
        /// Steps driven, restarts included
        rounds: usize,
    },
}

/// One search and rescue effort over three areas
///
/// Owns every piece of mutable state: the hidden target, probabilities,
/// per-area search histories and the random source. Each call to
/// [`Session::step`] runs one complete round.
#[derive(Debug, Clone)]
pub struct Session {
    regions: [Region; 3],
    initial_priors: Priors,
    effectiveness_range: EffectivenessRange,
    placer: TargetPlacer,
    rng: StdRng,
    target: Target,
    priors: Priors,
    histories: [SearchHistory; 3],
    state: SessionState,
    round: usize,
}

/// Create a session from raw dimensions and priors
///
/// Without a seed the random source is seeded from the operating system.
///
/// # Errors
///
/// Returns an error if the dimensions or priors are invalid
pub fn new_session(
    region_dims: [(usize, usize); 3],
    initial_priors: [f64; 3],
    rng_seed: Option<u64>,
) -> Result<Session> {
    let config = SessionConfig {
        region_dims,
        initial_priors,
        ..SessionConfig::default()
    };
    Session::new(&config, rng_seed)
}

impl Session {
    /// Create a session with a randomly placed target
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: &SessionConfig, seed: Option<u64>) -> Result<Self> {
        let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let regions = config.regions()?;
        let placer = TargetPlacer::default();
        let target = placer.place(&regions, &mut rng);
        Self::assemble(config, regions, placer, rng, target)
    }

    /// Create a session with the target at a known location
    ///
    /// A restart still draws a fresh random target.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the target lies
    /// outside its area
    pub fn with_target(
        config: &SessionConfig,
        region: RegionId,
        cell: Cell,
        seed: Option<u64>,
    ) -> Result<Self> {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let regions = config.regions()?;
        let target = Target::new(&regions, region, cell)?;
        Self::assemble(config, regions, TargetPlacer::default(), rng, target)
    }

    fn assemble(
        config: &SessionConfig,
        regions: [Region; 3],
        placer: TargetPlacer,
        rng: StdRng,
        target: Target,
    ) -> Result<Self> {
        let initial_priors = config.priors()?;
        debug!(%target, priors = %initial_priors, "session initialized");

        Ok(Self {
            regions,
            initial_priors,
            effectiveness_range: config.effectiveness_range.clone(),
            placer,
            rng,
            target,
            priors: initial_priors,
            histories: regions.map(SearchHistory::new),
            state: SessionState::Initialized,
            round: 0,
        })
    }

    /// Current lifecycle state
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Current probabilities
    pub const fn priors(&self) -> &Priors {
        &self.priors
    }

    /// Rounds completed since the session (or last restart) began
    pub const fn round(&self) -> usize {
        self.round
    }

    /// The three search areas
    pub const fn regions(&self) -> &[Region; 3] {
        &self.regions
    }

    /// Hidden target location, for scoring and display after the fact
    pub const fn target(&self) -> &Target {
        &self.target
    }

    /// Search history of one area
    pub fn history(&self, region: RegionId) -> Option<&SearchHistory> {
        self.histories.get(region.index())
    }

    /// Whether every cell of an area has been searched
    pub fn is_exhausted(&self, region: RegionId) -> bool {
        self.history(region).is_some_and(SearchHistory::is_exhausted)
    }

    /// State summary for action selectors
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            round: self.round,
            priors: self.priors,
            exhausted: RegionId::ALL.map(|region| self.is_exhausted(region)),
        }
    }

    /// Apply one action, drawing fresh search effectiveness
    ///
    /// # Errors
    ///
    /// Returns an error if the session has ended or the action names the
    /// same area twice as a pair
    pub fn step(&mut self, action: Action) -> Result<RoundResult> {
        self.check_accepts(action)?;
        match action {
            Action::Restart => Ok(self.restart()),
            Action::Quit => Ok(self.quit()),
            Action::SearchTwice(_) | Action::SearchPair(..) => {
                let draws = self
                    .effectiveness_range
                    .draw_for(&action.searched_regions(), &mut self.rng);
                self.run_round(action, draws)
            }
        }
    }

    /// Apply one action with caller-supplied effectiveness per area
    ///
    /// Values for areas the action does not search are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the session has ended, the action is malformed,
    /// or any value is outside `[0, 1]`
    pub fn step_with_effectiveness(
        &mut self,
        action: Action,
        effectiveness: [f64; 3],
    ) -> Result<RoundResult> {
        self.check_accepts(action)?;
        let supplied = EffectivenessVector::new(effectiveness).with_round(self.round + 1)?;
        match action {
            Action::Restart => Ok(self.restart()),
            Action::Quit => Ok(self.quit()),
            Action::SearchTwice(_) | Action::SearchPair(..) => {
                let mut draws = EffectivenessVector::ZERO;
                for region in action.searched_regions() {
                    draws.set(region, supplied.get(region));
                }
                self.run_round(action, draws)
            }
        }
    }

    /// Drive the session with a selector until it ends or hits the round cap
    ///
    /// Restarts chosen by the selector reset the session's round count but
    /// still count toward `max_rounds`, which caps every step driven here.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Session::step`]
    pub fn run<S: ActionSelector + ?Sized>(
        &mut self,
        selector: &mut S,
        max_rounds: usize,
    ) -> Result<SessionOutcome> {
        let mut driven = 0;
        loop {
            match self.state {
                SessionState::Found { rounds, .. } => return Ok(SessionOutcome::Found { rounds }),
                SessionState::Quit { rounds } => return Ok(SessionOutcome::Quit { rounds }),
                SessionState::Initialized | SessionState::RoundInProgress => {}
            }
            if driven >= max_rounds {
                warn!(rounds = driven, "round cap reached without finding the target");
                return Ok(SessionOutcome::Unresolved { rounds: driven });
            }

            let action = selector.select(&self.snapshot());
            self.step(action)?;
            driven += 1;
        }
    }

    fn check_accepts(&self, action: Action) -> Result<()> {
        let finished = match self.state {
            SessionState::Quit { .. } => true,
            SessionState::Found { .. } => action.is_search(),
            SessionState::Initialized | SessionState::RoundInProgress => false,
        };
        if finished {
            return Err(AlgorithmError::SessionFinished {
                rounds: self.round,
                state: self.state.label(),
            });
        }
        if let Action::SearchPair(a, b) = action {
            Action::pair(a, b).with_round(self.round + 1)?;
        }
        Ok(())
    }

    fn restart(&mut self) -> RoundResult {
        info!(abandoned_after = self.round, "session restarted");
        self.target = self.placer.place(&self.regions, &mut self.rng);
        self.priors = self.initial_priors;
        for history in &mut self.histories {
            history.clear();
        }
        self.round = 0;
        self.state = SessionState::Initialized;

        RoundResult {
            status: RoundStatus::Restarted,
            round: 0,
            priors_after: self.priors,
            effectiveness_used: EffectivenessVector::ZERO,
            cells_searched: [0; 3],
            warnings: Vec::new(),
        }
    }

    fn quit(&mut self) -> RoundResult {
        info!(rounds = self.round, "session quit");
        self.state = SessionState::Quit { rounds: self.round };

        RoundResult {
            status: RoundStatus::Quit,
            round: self.round,
            priors_after: self.priors,
            effectiveness_used: EffectivenessVector::ZERO,
            cells_searched: [0; 3],
            warnings: Vec::new(),
        }
    }

    /// Search every event of the action, then revise probabilities once
    fn run_round(&mut self, action: Action, draws: EffectivenessVector) -> Result<RoundResult> {
        self.round += 1;
        self.state = SessionState::RoundInProgress;

        // Only areas spent before the round count as exhausted
        let exhausted = RegionId::ALL.map(|region| self.is_exhausted(region));
        let mut events_per_region = [0_usize; 3];
        let mut cells_searched = [0_usize; 3];
        let mut found = false;

        for region_id in action.search_events() {
            let index = region_id.index();
            let (Some(region), Some(history)) =
                (self.regions.get(index), self.histories.get_mut(index))
            else {
                return Err(AlgorithmError::InvalidRegion {
                    number: region_id.number(),
                })
                .with_context(ErrorContext {
                    round: Some(self.round),
                    region: Some(region_id),
                });
            };

            let report = search(
                region,
                draws.get(region_id),
                history,
                &self.target,
                &mut self.rng,
            );
            let newly_covered = history.record(&report.searched);

            if let Some(count) = events_per_region.get_mut(index) {
                *count += 1;
            }
            if let Some(count) = cells_searched.get_mut(index) {
                *count += newly_covered;
            }
            if report.outcome == SearchOutcome::Found {
                found = true;
            }
        }

        let mut warnings = Vec::new();
        let mut used = EffectivenessVector::ZERO;
        for region in RegionId::ALL {
            let index = region.index();
            let events = events_per_region.get(index).copied().unwrap_or(0);
            let covered = cells_searched.get(index).copied().unwrap_or(0);
            let was_exhausted = exhausted.get(index).copied().unwrap_or(false);
            let area = self.regions.get(index).map_or(0, Region::area);

            if events > 0 && was_exhausted {
                warn!(round = self.round, %region, "area already fully searched");
                warnings.push(RoundWarning::ExhaustedRegion { region });
            }

            // Repeated searches of one area fold into a single coverage measurement
            let effectiveness = if events == 0 || (events == 1 && was_exhausted) {
                Effectiveness::NONE
            } else if events == 1 {
                draws.get(region)
            } else {
                Effectiveness::from_coverage(covered, area)
            };
            used.set(region, effectiveness);
        }

        let revision = revise(&self.priors, &used);
        if revision.degenerate {
            warnings.push(RoundWarning::DegenerateUpdate);
        }
        self.priors = revision.priors;

        let status = if found {
            self.state = SessionState::Found {
                target: self.target,
                rounds: self.round,
            };
            info!(round = self.round, target = %self.target, "target found");
            RoundStatus::Found {
                region: self.target.region(),
                cell: self.target.cell(),
            }
        } else {
            RoundStatus::NotFound
        };

        debug!(
            round = self.round,
            %action,
            effectiveness = ?used.values(),
            priors = %self.priors,
            found,
            "round complete"
        );

        Ok(RoundResult {
            status,
            round: self.round,
            priors_after: self.priors,
            effectiveness_used: used,
            cells_searched,
            warnings,
        })
    }
}
