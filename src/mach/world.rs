use super::{Direction, Heading};
use std::collections::BTreeMap;

/// Number of inventory slots. Slots are addressed `1..=SLOTS`.
pub const SLOTS: usize = 8;

pub type Slot = usize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }

    pub fn step(self, heading: Heading) -> Cell {
        let (dx, dy) = heading.delta();
        Cell::new(self.x + dx, self.y + dy)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// What happens when the agent walks off the edge of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Clamp,
    Wrap,
}

impl Default for Boundary {
    fn default() -> Boundary {
        Boundary::Clamp
    }
}

/// Visible outcomes of `use` and `explode` for a front end to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Used { slot: Slot, cell: Cell },
    Exploded { cell: Cell, radius: i32 },
}

/// ## Agent world state
///
/// Construct and furnish a `World` before handing it to a `Processor`.
/// From then on only instruction execution changes it.

#[derive(Debug, Clone)]
pub struct World {
    width: i32,
    height: i32,
    boundary: Boundary,
    position: Cell,
    heading: Heading,
    inventory: [u32; SLOTS],
    held: Option<Slot>,
    ground: BTreeMap<Cell, Vec<Slot>>,
    effects: Vec<Effect>,
    destroyed: bool,
}

impl World {
    pub fn new(width: i32, height: i32) -> World {
        debug_assert!(width > 0 && height > 0);
        World {
            width: width.max(1),
            height: height.max(1),
            boundary: Boundary::default(),
            position: Cell::default(),
            heading: Heading::default(),
            inventory: [0; SLOTS],
            held: None,
            ground: BTreeMap::new(),
            effects: vec![],
            destroyed: false,
        }
    }

    pub fn with_boundary(mut self, boundary: Boundary) -> World {
        self.boundary = boundary;
        self
    }

    pub fn with_position(mut self, x: i32, y: i32) -> World {
        self.position = self.confine(Cell::new(x, y));
        self
    }

    pub fn with_heading(mut self, heading: Heading) -> World {
        self.heading = heading;
        self
    }

    /// Puts one item for `slot` on the ground at `cell`.
    pub fn place(&mut self, cell: Cell, slot: Slot) {
        debug_assert!((1..=SLOTS).contains(&slot));
        let cell = self.confine(cell);
        self.ground.entry(cell).or_default().push(slot);
    }

    pub fn give(&mut self, slot: Slot, count: u32) {
        if let Some(n) = self.slot_mut(slot) {
            *n = n.saturating_add(count);
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn held(&self) -> Option<Slot> {
        self.held
    }

    pub fn inventory(&self) -> &[u32; SLOTS] {
        &self.inventory
    }

    pub fn count(&self, slot: Slot) -> u32 {
        match slot.checked_sub(1).and_then(|i| self.inventory.get(i)) {
            Some(n) => *n,
            None => 0,
        }
    }

    /// Items lying at `cell`, bottom of the pile first.
    pub fn items_at(&self, cell: Cell) -> &[Slot] {
        match self.ground.get(&cell) {
            Some(pile) => pile.as_slice(),
            None => &[],
        }
    }

    pub fn ground(&self) -> impl Iterator<Item = (&Cell, &Vec<Slot>)> {
        self.ground.iter()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Applies the boundary policy to a cell that may be off the grid.
    pub fn confine(&self, cell: Cell) -> Cell {
        match self.boundary {
            Boundary::Clamp => Cell::new(
                cell.x.max(0).min(self.width - 1),
                cell.y.max(0).min(self.height - 1),
            ),
            Boundary::Wrap => Cell::new(
                cell.x.rem_euclid(self.width),
                cell.y.rem_euclid(self.height),
            ),
        }
    }

    /// Cell a direction operand refers to, relative to the agent.
    pub fn target(&self, direction: Direction) -> Cell {
        match direction.resolve(self.heading) {
            Some(heading) => self.confine(self.position.step(heading)),
            None => self.position,
        }
    }

    pub(super) fn advance(&mut self) {
        self.position = self.confine(self.position.step(self.heading));
    }

    pub(super) fn turn(&mut self, heading: Heading) {
        self.heading = heading;
    }

    pub(super) fn wield(&mut self, slot: Option<Slot>) {
        self.held = slot;
    }

    /// Moves the top item of the pile at `cell` into the inventory.
    pub(super) fn pick_up(&mut self, cell: Cell) -> Option<Slot> {
        let pile = self.ground.get_mut(&cell)?;
        let slot = pile.pop()?;
        if pile.is_empty() {
            self.ground.remove(&cell);
        }
        self.give(slot, 1);
        Some(slot)
    }

    /// Moves one item of the held slot onto the ground at `cell`.
    pub(super) fn put_down(&mut self, cell: Cell) -> Option<Slot> {
        let slot = self.held?;
        let n = self.slot_mut(slot)?;
        if *n == 0 {
            return None;
        }
        *n -= 1;
        self.ground.entry(cell).or_default().push(slot);
        Some(slot)
    }

    pub(super) fn use_held(&mut self) -> Option<Slot> {
        let slot = self.held?;
        if self.count(slot) == 0 {
            return None;
        }
        let cell = self.target(Direction::Front);
        self.effects.push(Effect::Used { slot, cell });
        Some(slot)
    }

    /// Clears the ground within Chebyshev distance `radius` of the agent.
    pub(super) fn explode(&mut self, radius: i32) {
        let radius = radius.max(0);
        let center = self.position;
        self.ground.retain(|cell, _| {
            (cell.x - center.x).abs() > radius || (cell.y - center.y).abs() > radius
        });
        self.effects.push(Effect::Exploded {
            cell: center,
            radius,
        });
        self.destroyed = true;
    }

    fn slot_mut(&mut self, slot: Slot) -> Option<&mut u32> {
        let index = slot.checked_sub(1)?;
        self.inventory.get_mut(index)
    }
}
