//! Game session
//!
//! The top-level orchestrator. Owns every piece of game state and routes all
//! mutation through its action methods; input and render adapters hold a
//! `GameSession` and nothing else.
//!
//! Exactly one of the overworld or an active minigame updates per tick.
//! Terminal states freeze the simulation until an explicit [`restart`].
//!
//! Action methods model single presses. Edge-triggering lives in the input
//! adapter: it must consume a held key after the first use so one press
//! yields one interact or dig attempt, not one per frame.
//!
//! [`restart`]: GameSession::restart

use hecs::Entity;

use crate::data;
use crate::ecs::{self, ControlBinding, Player, PlayerId, Position};
use crate::game::clock::{DayNightClock, MAX_NIGHTS};
use crate::game::messages::MessageLog;
use crate::game::rng::GameRng;
use crate::game::snapshot::{MinigameView, PlayerView, Snapshot};
use crate::items::{craft, CraftItem, RecipeBook, SharedInventory};
use crate::minigames::{Minigame, MinigameKey, MinigameVariant, Verdict};
use crate::world::{self, World, WORLD_SIZE};

/// Chance that digging a fresh tile turns up a stone
const DIG_STONE_CHANCE: f64 = 0.1;

/// Why a lost session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossCause {
    NightsExhausted,
    EnemyContact,
}

/// Whether the session is still playable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Active,
    Won,
    Lost { cause: LossCause },
}

/// One complete game: world, players, clock, inventory, and the mode switch
/// between overworld simulation and an active minigame.
pub struct GameSession {
    rng: GameRng,
    world: World,
    entities: hecs::World,
    players: [Entity; 2],
    inventory: SharedInventory,
    recipes: RecipeBook,
    clock: DayNightClock,
    messages: MessageLog,
    minigame: Option<Minigame>,
    outcome: SessionOutcome,
    paused: bool,
    paused_at: Option<u64>,
    view_target: PlayerId,
    spawn_counter: u64,
    now_ms: u64,
}

impl GameSession {
    /// Start a session with a system-random seed and recipes from disk
    pub fn new(now_ms: u64) -> Self {
        Self::create(GameRng::from_entropy(), data::load_recipes(), now_ms)
    }

    /// Start a fully deterministic session from an explicit seed
    pub fn with_seed(seed: u32, now_ms: u64) -> Self {
        Self::create(GameRng::new(seed), RecipeBook::builtin(), now_ms)
    }

    fn create(mut rng: GameRng, recipes: RecipeBook, now_ms: u64) -> Self {
        let (world, spawns) = world::generate(&mut rng, WORLD_SIZE);

        let mut entities = hecs::World::new();
        let players = [
            entities.spawn((
                spawns[0],
                Player { id: PlayerId::One, binding: ControlBinding::player_one() },
            )),
            entities.spawn((
                spawns[1],
                Player { id: PlayerId::Two, binding: ControlBinding::player_two() },
            )),
        ];

        let mut messages = MessageLog::new();
        messages.push(
            "Find 3 shrines, craft a shovel, dig for the chamber, rescue the child, build the house.",
            now_ms,
        );
        log::info!("new game, seed {}", rng.seed());

        Self {
            rng,
            world,
            entities,
            players,
            inventory: SharedInventory::new(),
            recipes,
            clock: DayNightClock::new(now_ms),
            messages,
            minigame: None,
            outcome: SessionOutcome::Active,
            paused: false,
            paused_at: None,
            view_target: PlayerId::One,
            spawn_counter: 0,
            now_ms,
        }
    }

    /// Discard everything and start over with a fresh seed.
    ///
    /// The new cycle is anchored at the current clock reading.
    pub fn restart(&mut self) {
        let recipes = self.recipes.clone();
        *self = Self::create(GameRng::from_entropy(), recipes, self.now_ms);
    }

    // ========================================================================
    // Per-frame update
    // ========================================================================

    /// Advance the session to `now_ms`, a monotonic millisecond reading from
    /// the adapter's clock.
    ///
    /// Dispatches to exactly one of the overworld or the active minigame.
    /// Pausing suspends overworld simulation only; the latest time reading
    /// is always recorded so resuming can shift the clock epoch.
    pub fn tick(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
        self.messages.prune(now_ms);
        if self.is_terminal() {
            return;
        }

        if let Some(mut game) = self.minigame.take() {
            match game.update(now_ms) {
                Some(verdict) => self.resolve_minigame(verdict),
                None => self.minigame = Some(game),
            }
        } else if !self.paused {
            self.world_tick(now_ms);
        }
    }

    fn world_tick(&mut self, now_ms: u64) {
        let events = self.clock.advance(now_ms);
        if events.night_began && self.clock.nights_elapsed() > MAX_NIGHTS {
            self.lose(
                LossCause::NightsExhausted,
                "You ran out of time. 99 nights have passed.",
            );
            return;
        }

        let night = self.clock.is_night(now_ms);
        let positions = [
            self.player_position(PlayerId::One),
            self.player_position(PlayerId::Two),
        ];
        ecs::update_enemies(
            &mut self.entities,
            positions,
            night,
            &mut self.spawn_counter,
            &mut self.rng,
        );

        if night {
            let tagged = [
                (PlayerId::One, positions[0]),
                (PlayerId::Two, positions[1]),
            ];
            if ecs::enemy_contact(&self.entities, tagged).is_some() {
                self.lose(
                    LossCause::EnemyContact,
                    "You were slain by a creature in the night.",
                );
            }
        }
    }

    // ========================================================================
    // World-mode actions
    // ========================================================================

    /// Step a player one tile; axes are clamped to the world bounds
    pub fn move_player(&mut self, id: PlayerId, dx: i32, dy: i32) {
        if !self.world_actions_allowed() {
            return;
        }
        let entity = self.players[id.index()];
        if let Ok(mut pos) = self.entities.get::<&mut Position>(entity) {
            pos.x = (pos.x + dx.clamp(-1, 1)).clamp(0, WORLD_SIZE - 1);
            pos.y = (pos.y + dy.clamp(-1, 1)).clamp(0, WORLD_SIZE - 1);
        }
    }

    /// Resolve an interact press at the player's tile.
    ///
    /// Fixed priority: harvest a tree, else a rock, else enter a shrine
    /// minigame, else work the chamber, else try to place the house.
    pub fn interact(&mut self, id: PlayerId) {
        if !self.world_actions_allowed() {
            return;
        }
        let pos = self.player_position(id);

        if self.world.trees.remove(&pos) {
            self.inventory.add_wood();
            self.message("+1 wood");
            return;
        }
        if self.world.rocks.remove(&pos) {
            self.inventory.add_stone();
            self.message("+1 stone");
            return;
        }
        if let Some(variant) = self.world.shrine_at(pos).map(|s| s.variant) {
            if self.inventory.has_all_sigils() {
                self.message("You already have all sigils.");
            } else {
                self.start_minigame(variant);
            }
            return;
        }
        if self.world.chamber.pos == pos {
            if self.world.chamber.unlocked {
                return;
            }
            if self.inventory.sigils() >= self.world.chamber.required_sigils {
                if !self.inventory.child_rescued() {
                    self.world.chamber.unlocked = true;
                    self.inventory.rescue_child();
                    self.message("You rescued the child! Build your house.");
                }
            } else {
                self.message("A sealed chamber. You need 3 sigils.");
            }
            return;
        }
        if self.inventory.child_rescued()
            && self.inventory.has_house_frame()
            && !self.inventory.house_built()
        {
            self.try_place_house(pos);
        }
    }

    /// Resolve a dig press at the player's tile
    pub fn dig(&mut self, id: PlayerId) {
        if !self.world_actions_allowed() {
            return;
        }
        if !self.inventory.has_shovel() {
            self.message("You need a shovel to dig.");
            return;
        }
        let pos = self.player_position(id);
        if self.world.dug.contains(&pos) {
            self.message("Already dug here.");
            return;
        }
        self.world.dug.insert(pos);
        if self.rng.gen_bool(DIG_STONE_CHANCE) {
            self.inventory.add_stone();
            self.message("You found +1 stone while digging.");
        }
        if self.world.chamber.pos == pos {
            // Flavor only; the chamber opens on sigils, never on digging.
            self.message("You uncovered the entrance to an underground chamber.");
        }
    }

    /// Craft an item from the shared inventory (external menu trigger)
    pub fn craft(&mut self, item: CraftItem) {
        if self.minigame.is_some() || self.is_terminal() {
            return;
        }
        let (_, msg) = craft(&mut self.inventory, &self.recipes, item);
        let now = self.now_ms;
        self.messages.push(msg, now);
    }

    fn try_place_house(&mut self, pos: Position) {
        if self.world.is_obstructed(pos) {
            self.message("Clear the tile first.");
            return;
        }
        self.inventory.build_house();
        self.message("You built a home. THE END ♥");
        self.outcome = SessionOutcome::Won;
        log::info!("session won on day {}", self.clock.day_count());
    }

    // ========================================================================
    // Minigame mode
    // ========================================================================

    fn start_minigame(&mut self, variant: MinigameVariant) {
        if self.minigame.is_some() {
            return;
        }
        log::debug!("minigame started: {variant:?}");
        self.minigame = Some(Minigame::start(variant, &mut self.rng, self.now_ms));
    }

    /// Route a pointer press (virtual surface coordinates) to the active
    /// minigame; ignored in world mode
    pub fn minigame_pointer(&mut self, x: f64, y: f64) {
        if let Some(mut game) = self.minigame.take() {
            match game.handle_pointer(x, y) {
                Some(verdict) => self.resolve_minigame(verdict),
                None => self.minigame = Some(game),
            }
        }
    }

    /// Route a keystroke to the active minigame; ignored in world mode
    pub fn minigame_key(&mut self, key: MinigameKey) {
        if let Some(mut game) = self.minigame.take() {
            match game.handle_key(key) {
                Some(verdict) => self.resolve_minigame(verdict),
                None => self.minigame = Some(game),
            }
        }
    }

    fn resolve_minigame(&mut self, verdict: Verdict) {
        if verdict.success {
            self.inventory.grant_sigil();
        }
        log::debug!(
            "minigame resolved: success={}, sigils={}",
            verdict.success,
            self.inventory.sigils()
        );
        self.message(verdict.message);
        self.minigame = None;
    }

    // ========================================================================
    // Session-level controls
    // ========================================================================

    /// Toggle the pause flag.
    ///
    /// On resume the clock epoch is shifted forward by the paused duration,
    /// so paused time never counts toward the day/night cycle.
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.paused = false;
            if let Some(started) = self.paused_at.take() {
                self.clock.shift_epoch(self.now_ms.saturating_sub(started));
            }
        } else {
            self.paused = true;
            self.paused_at = Some(self.now_ms);
        }
    }

    /// Swap which player the camera follows
    pub fn switch_view_target(&mut self) {
        self.view_target = self.view_target.other();
    }

    fn world_actions_allowed(&self) -> bool {
        !self.is_terminal() && !self.paused && self.minigame.is_none()
    }

    fn lose(&mut self, cause: LossCause, text: &str) {
        self.message(text);
        self.outcome = SessionOutcome::Lost { cause };
        log::info!("session lost ({cause:?})");
    }

    fn message(&mut self, text: &str) {
        let now = self.now_ms;
        self.messages.push(text, now);
    }

    // ========================================================================
    // Read access
    // ========================================================================

    pub fn outcome(&self) -> SessionOutcome {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome != SessionOutcome::Active
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// True while a minigame owns updates and input
    pub fn in_minigame(&self) -> bool {
        self.minigame.is_some()
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn inventory(&self) -> &SharedInventory {
        &self.inventory
    }

    pub fn clock(&self) -> &DayNightClock {
        &self.clock
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    pub fn minigame(&self) -> Option<&Minigame> {
        self.minigame.as_ref()
    }

    pub fn view_target(&self) -> PlayerId {
        self.view_target
    }

    /// Current position of a player
    pub fn player_position(&self, id: PlayerId) -> Position {
        self.entities
            .get::<&Position>(self.players[id.index()])
            .map(|p| *p)
            .unwrap_or_default()
    }

    /// A player's input binding, for help screens and input routing
    pub fn player_binding(&self, id: PlayerId) -> ControlBinding {
        self.entities
            .get::<&Player>(self.players[id.index()])
            .map(|p| p.binding.clone())
            .unwrap_or_else(|_| ControlBinding::player_one())
    }

    /// Creature positions in spawn order
    pub fn enemy_positions(&self) -> Vec<Position> {
        ecs::enemy_positions(&self.entities)
    }

    /// Capture an owned, serializable view of everything a renderer needs
    pub fn snapshot(&self) -> Snapshot {
        let sort = |set: &std::collections::HashSet<Position>| {
            let mut v: Vec<Position> = set.iter().copied().collect();
            v.sort_by_key(|p| (p.x, p.y));
            v
        };
        Snapshot {
            seed: self.seed(),
            day_count: self.clock.day_count(),
            nights_elapsed: self.clock.nights_elapsed(),
            nights_left: self.clock.nights_left(),
            phase: self.clock.phase(self.now_ms),
            is_night: self.clock.is_night(self.now_ms),
            paused: self.paused,
            won: self.outcome == SessionOutcome::Won,
            lost: matches!(self.outcome, SessionOutcome::Lost { .. }),
            view_target: self.view_target,
            players: [
                PlayerView {
                    id: PlayerId::One,
                    pos: self.player_position(PlayerId::One),
                    binding: self.player_binding(PlayerId::One),
                },
                PlayerView {
                    id: PlayerId::Two,
                    pos: self.player_position(PlayerId::Two),
                    binding: self.player_binding(PlayerId::Two),
                },
            ],
            enemies: self.enemy_positions(),
            trees: sort(&self.world.trees),
            rocks: sort(&self.world.rocks),
            dug: sort(&self.world.dug),
            shrines: self.world.shrines.clone(),
            chamber: self.world.chamber,
            inventory: self.inventory.clone(),
            messages: self.messages.iter().cloned().collect(),
            minigame: self
                .minigame
                .as_ref()
                .map(|g| MinigameView::of(g, self.now_ms)),
        }
    }
}
