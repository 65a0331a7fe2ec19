//! Palette catalog: 10 sets of 10 named palettes
//!
//! Layout:
//! - set 0: the 10 base palettes
//! - set 1: the same 10 base palettes again (kept as a verbatim duplicate)
//! - set k, k = 2..9: the base palettes hue-rotated by `(k - 1) * 0.1`
//!
//! Each slot's [`PaletteKind`] is decided here, once, from its name.

use crate::palette::{Palette, PaletteKind};

/// Number of palette sets
pub const SET_COUNT: usize = 10;

/// Palettes per set
pub const SLOTS_PER_SET: usize = 10;

/// Total catalog slots
pub const SLOT_COUNT: usize = SET_COUNT * SLOTS_PER_SET;

/// The slot that animates as a rainbow (set 0, index 1)
pub const RAINBOW_SLOT: usize = 1;

/// Name marker of animated hue-shift slots
pub const SHIFT_MARKER: &str = " Shift";

/// Hue offset between consecutive shifted sets
pub const SET_SHIFT_STEP: f32 = 0.1;

/// Longest generated slot label
const MAX_LABEL_LEN: usize = 20;

/// The 10 hand-picked base palettes
pub const BASE_PALETTES: [Palette; 10] = [
    Palette::from_triples([(0, 255, 0), (0, 180, 0), (0, 100, 0)]),
    Palette::from_triples([(255, 0, 0), (0, 255, 0), (0, 0, 255)]),
    Palette::from_triples([(0, 255, 255), (255, 0, 255), (255, 105, 180)]),
    Palette::from_triples([(255, 20, 147), (173, 216, 230), (255, 105, 180)]),
    Palette::from_triples([(200, 200, 200), (150, 150, 150), (100, 100, 100)]),
    Palette::from_triples([(0, 105, 148), (0, 168, 232), (72, 202, 228)]),
    Palette::from_triples([(252, 92, 101), (253, 150, 68), (254, 211, 48)]),
    Palette::from_triples([(34, 139, 34), (50, 205, 50), (107, 142, 35)]),
    Palette::from_triples([(255, 69, 0), (255, 140, 0), (255, 215, 0)]),
    Palette::from_triples([(255, 179, 186), (255, 223, 186), (255, 255, 186)]),
];

const NAMED_SLOTS: [&str; 40] = [
    "Matrix Green", "Rainbow Cycle", "Cyberpunk Neon", "Vaporwave Pastel", "Monochrome Gray",
    "Ocean Blue", "Sunset Glow", "Forest Deep", "Fire Blaze", "Pastel Dream",
    "Neon Lights", "Retro Wave", "Galaxy Dust", "Candy Floss", "Ice Chill",
    "Lavender Mist", "Gold Shine", "Silver Lining", "Copper Rust", "Electric Blue",
    "Rainbow Shift", "Sunset Shift", "Ocean Shift", "Forest Shift", "Fire Shift",
    "Candy Shift", "Ice Shift", "Lavender Shift", "Gold Shift", "Silver Shift",
    "Copper Shift", "Electric Shift", "Neon Shift", "Retro Shift", "Galaxy Shift",
    "Pastel Shift", "Matrix Shift", "Cyberpunk Shift", "Vaporwave Shift", "Monochrome Shift",
];

/// Display names for every slot
///
/// The first 40 slots carry hand-written names; later slots get generated
/// `Set{n} Shift{m}` labels, `n` being the zero-based set and `m` the
/// one-based slot number.
pub fn palette_names() -> Vec<String> {
    let mut names: Vec<String> = NAMED_SLOTS.iter().map(|s| s.to_string()).collect();
    for index in NAMED_SLOTS.len()..SLOT_COUNT {
        let label = format!("Set{}{}{}", index / SLOTS_PER_SET, SHIFT_MARKER, index + 1);
        names.push(label.chars().take(MAX_LABEL_LEN).collect());
    }
    names
}

/// A palette selection: set index and slot within the set, both 0..10
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PaletteSelection {
    pub set: usize,
    pub slot: usize,
}

impl PaletteSelection {
    pub const fn new(set: usize, slot: usize) -> Self {
        Self {
            set: set % SET_COUNT,
            slot: slot % SLOTS_PER_SET,
        }
    }

    /// Flat catalog index
    #[inline]
    pub const fn index(&self) -> usize {
        self.set * SLOTS_PER_SET + self.slot
    }

    /// Next slot in the same set, wrapping
    pub fn next_slot(self) -> Self {
        Self::new(self.set, self.slot + 1)
    }

    /// First slot of `set`
    pub fn first_of_set(set: usize) -> Self {
        Self::new(set, 0)
    }

    /// First slot of the set `delta` sets away, wrapping
    pub fn step_set(self, delta: isize) -> Self {
        let set = (self.set as isize + delta).rem_euclid(SET_COUNT as isize) as usize;
        Self::first_of_set(set)
    }

    /// Next slot across the whole catalog: slot 9 rolls into the next set,
    /// set 9 rolls back to set 0
    pub fn advance(self) -> Self {
        let index = (self.index() + 1) % SLOT_COUNT;
        Self::new(index / SLOTS_PER_SET, index % SLOTS_PER_SET)
    }
}

/// One catalog entry
#[derive(Clone, Debug, PartialEq)]
pub struct PaletteSlot {
    pub name: String,
    pub palette: Palette,
    pub kind: PaletteKind,
}

/// The full palette catalog, built once at startup
#[derive(Clone, Debug)]
pub struct PaletteCatalog {
    slots: Vec<PaletteSlot>,
    names: Vec<String>,
}

impl PaletteCatalog {
    /// Build the 100-slot catalog
    pub fn build() -> Self {
        let names = palette_names();

        let mut palettes: Vec<Palette> = Vec::with_capacity(SLOT_COUNT);
        palettes.extend_from_slice(&BASE_PALETTES);
        palettes.extend_from_slice(&BASE_PALETTES);
        for set in 2..SET_COUNT {
            let shift = (set - 1) as f32 * SET_SHIFT_STEP;
            palettes.extend(BASE_PALETTES.iter().map(|p| p.hue_rotated(shift)));
        }

        let slots = palettes
            .into_iter()
            .enumerate()
            .map(|(index, palette)| {
                let name = display_name(&names, index);
                let kind = resolve_kind(&names, index);
                PaletteSlot { name, palette, kind }
            })
            .collect();

        log::debug!("Built palette catalog with {} slots", SLOT_COUNT);
        Self { slots, names }
    }

    /// Number of slots
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot at a flat index, wrapping past the end
    pub fn slot(&self, index: usize) -> &PaletteSlot {
        &self.slots[index % self.slots.len()]
    }

    /// Slot for a selection
    pub fn get(&self, selection: PaletteSelection) -> &PaletteSlot {
        self.slot(selection.index())
    }

    /// Display name for any index, synthesizing `Palette N` past the named range
    pub fn name(&self, index: usize) -> String {
        display_name(&self.names, index)
    }

    /// The stored base palette a slot index maps onto
    pub fn base_palette(&self, base_slot: usize) -> Palette {
        BASE_PALETTES[base_slot % BASE_PALETTES.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaletteSlot> {
        self.slots.iter()
    }
}

impl Default for PaletteCatalog {
    fn default() -> Self {
        Self::build()
    }
}

fn display_name(names: &[String], index: usize) -> String {
    names
        .get(index)
        .cloned()
        .unwrap_or_else(|| format!("Palette {}", index + 1))
}

/// Decide how a slot animates
///
/// Shift slots animate from the base palette whose name shares their first
/// word ("Sunset Shift" -> "Sunset Glow"); only the two unshifted sets are
/// searched. Shift slots without such a base, including every generated
/// `Set{n} Shift{m}` label, draw their stored hue-rotated palette.
fn resolve_kind(names: &[String], index: usize) -> PaletteKind {
    if index == RAINBOW_SLOT {
        return PaletteKind::Rainbow;
    }

    let name = display_name(names, index);
    if !name.contains(SHIFT_MARKER) {
        return PaletteKind::Static;
    }

    let stem = name.replace(SHIFT_MARKER, "");
    let stem_word = stem.split_whitespace().next();
    let base = names
        .iter()
        .take(2 * SLOTS_PER_SET)
        .position(|n| !n.contains(SHIFT_MARKER) && n.split_whitespace().next() == stem_word);

    match base {
        Some(base) => PaletteKind::AnimatedShift {
            base_slot: base % SLOTS_PER_SET,
        },
        None => PaletteKind::Static,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_100_slots() {
        let catalog = PaletteCatalog::build();
        assert_eq!(catalog.len(), SLOT_COUNT);
    }

    #[test]
    fn test_names_cover_every_slot() {
        let names = palette_names();
        assert_eq!(names.len(), SLOT_COUNT);
        assert_eq!(names[0], "Matrix Green");
        assert_eq!(names[40], "Set4 Shift41");
        assert_eq!(names[59], "Set5 Shift60");
        assert_eq!(names[99], "Set9 Shift100");
        assert!(names.iter().all(|n| n.len() <= MAX_LABEL_LEN));
    }

    #[test]
    fn test_name_fallback() {
        let catalog = PaletteCatalog::build();
        assert_eq!(catalog.name(0), "Matrix Green");
        assert_eq!(catalog.name(SLOT_COUNT), "Palette 101");
    }

    #[test]
    fn test_rainbow_slot_kind() {
        let catalog = PaletteCatalog::build();
        assert_eq!(catalog.slot(RAINBOW_SLOT).kind, PaletteKind::Rainbow);
        assert_eq!(catalog.slot(11).kind, PaletteKind::Static);
    }

    #[test]
    fn test_shift_kinds_resolve_base() {
        let catalog = PaletteCatalog::build();
        // "Rainbow Shift" -> "Rainbow Cycle"
        assert_eq!(catalog.slot(20).kind, PaletteKind::AnimatedShift { base_slot: 1 });
        // "Sunset Shift" -> "Sunset Glow"
        assert_eq!(catalog.slot(21).kind, PaletteKind::AnimatedShift { base_slot: 6 });
        // "Candy Shift" -> "Candy Floss" (slot 13)
        assert_eq!(catalog.slot(25).kind, PaletteKind::AnimatedShift { base_slot: 3 });
    }

    #[test]
    fn test_generated_labels_are_static() {
        let catalog = PaletteCatalog::build();
        for index in 4 * SLOTS_PER_SET..SLOT_COUNT {
            assert_eq!(catalog.slot(index).kind, PaletteKind::Static, "slot {}", index);
        }
    }

    #[test]
    fn test_unshifted_sets_are_static() {
        let catalog = PaletteCatalog::build();
        for index in 0..2 * SLOTS_PER_SET {
            if index != RAINBOW_SLOT {
                assert_eq!(catalog.slot(index).kind, PaletteKind::Static, "slot {}", index);
            }
        }
    }

    #[test]
    fn test_selection_index_and_wrap() {
        let s = PaletteSelection::new(3, 9);
        assert_eq!(s.index(), 39);
        assert_eq!(s.next_slot(), PaletteSelection::new(3, 0));
        assert_eq!(s.advance(), PaletteSelection::new(4, 0));
        assert_eq!(PaletteSelection::new(9, 9).advance(), PaletteSelection::new(0, 0));
    }

    #[test]
    fn test_step_set_wraps_and_resets_slot() {
        let s = PaletteSelection::new(0, 5);
        assert_eq!(s.step_set(-1), PaletteSelection::new(9, 0));
        assert_eq!(s.step_set(1), PaletteSelection::new(1, 0));
    }
}
