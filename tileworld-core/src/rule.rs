use alloc::vec::Vec;

/// What a rule reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleType {
    Resting,
    Moving,
    Pushing,
    Colliding,
}

/// Direction attached to a moving, pushing or colliding rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileDir {
    None,
    Left,
    Right,
    Up,
    Down,
}

impl TileDir {
    /// Index into the Left/Right/Up/Down arrow table.
    pub fn arrow_index(self) -> Option<usize> {
        match self {
            TileDir::None => None,
            TileDir::Left => Some(0),
            TileDir::Right => Some(1),
            TileDir::Up => Some(2),
            TileDir::Down => Some(3),
        }
    }

    /// The cell offset `(ax, ay)` the rule-type menu uses to place the
    /// second glyph of a pushing or colliding pair. It points against the
    /// direction of travel.
    pub fn menu_offset(self) -> (i32, i32) {
        match self {
            TileDir::Left => (1, 0),
            TileDir::Right => (-1, 0),
            TileDir::Down => (0, -1),
            TileDir::Up => (0, 1),
            TileDir::None => (0, 0),
        }
    }
}

/// The proposition attached to one tile kind at one neighbour cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrType {
    /// This kind must be the only one present.
    Only,
    /// This kind may be one of several.
    OneOf,
    /// This kind must be absent.
    Exclude,
    /// This kind must be present, among others.
    Include,
}

impl AttrType {
    /// Selector strip order.
    pub const ALL: [AttrType; 4] = [
        AttrType::Only,
        AttrType::OneOf,
        AttrType::Exclude,
        AttrType::Include,
    ];

    pub fn index(self) -> usize {
        match self {
            AttrType::Only => 0,
            AttrType::OneOf => 1,
            AttrType::Exclude => 2,
            AttrType::Include => 3,
        }
    }
}

/// A (rule type, direction) pair, as offered by the rule-type menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleKind {
    pub rule_type: RuleType,
    pub dir: TileDir,
}

impl RuleKind {
    pub const fn new(rule_type: RuleType, dir: TileDir) -> Self {
        RuleKind { rule_type, dir }
    }
}

/// Per-kind propositions for the neighbour cell at `(col, row)`, both
/// offsets from the diamond centre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrsAt {
    pub col: i32,
    pub row: i32,
    /// Indexed by tile-kind index.
    pub attrs: Vec<AttrType>,
}

impl AttrsAt {
    /// The default proposition set: the first kind is `Only`, every other
    /// kind is `Exclude`.
    pub fn with_defaults(col: i32, row: i32, kind_count: usize) -> Self {
        let attrs = (0..kind_count)
            .map(|i| if i == 0 { AttrType::Only } else { AttrType::Exclude })
            .collect();
        AttrsAt { col, row, attrs }
    }
}

/// Sparse map from neighbour offsets to their propositions. Holds at most
/// one entry per `(col, row)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttrMap {
    entries: Vec<AttrsAt>,
}

impl AttrMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttrsAt> {
        self.entries.iter()
    }

    pub fn get(&self, col: i32, row: i32) -> Option<&AttrsAt> {
        self.entries.iter().find(|a| a.col == col && a.row == row)
    }

    /// The entry for `(col, row)`, created with defaults if absent.
    ///
    /// Kinds registered after the entry was created are appended as
    /// `Exclude`, so `attrs` always covers `kind_count` kinds.
    pub fn entry(&mut self, col: i32, row: i32, kind_count: usize) -> &mut AttrsAt {
        let idx = match self.entries.iter().position(|a| a.col == col && a.row == row) {
            Some(i) => i,
            None => {
                self.entries.push(AttrsAt::with_defaults(col, row, kind_count));
                self.entries.len() - 1
            }
        };
        let item = &mut self.entries[idx];
        if item.attrs.len() < kind_count {
            item.attrs.resize(kind_count, AttrType::Exclude);
        }
        item
    }

    /// Set the proposition for `kind` at `(col, row)`. A missing entry or a
    /// kind index past the entry's length is ignored.
    pub fn set(&mut self, col: i32, row: i32, kind: usize, attr: AttrType) {
        if let Some(slot) = self
            .entries
            .iter_mut()
            .find(|a| a.col == col && a.row == row)
            .and_then(|a| a.attrs.get_mut(kind))
        {
            *slot = attr;
        }
    }
}

/// The single rule being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub rule_type: RuleType,
    pub dir: TileDir,
    pub attr_map: AttrMap,
}

impl Rule {
    pub fn kind(&self) -> RuleKind {
        RuleKind::new(self.rule_type, self.dir)
    }

    /// Adopt a new rule type and direction; propositions are kept.
    pub fn set_kind(&mut self, kind: RuleKind) {
        self.rule_type = kind.rule_type;
        self.dir = kind.dir;
    }

    /// Whether `kind` names this rule. Resting matches regardless of
    /// direction.
    pub fn matches(&self, kind: RuleKind) -> bool {
        kind.rule_type == self.rule_type
            && (kind.rule_type == RuleType::Resting || kind.dir == self.dir)
    }
}

impl Default for Rule {
    fn default() -> Self {
        Rule {
            rule_type: RuleType::Resting,
            dir: TileDir::None,
            attr_map: AttrMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rule_is_resting_without_direction() {
        let rule = Rule::default();
        assert_eq!(rule.kind(), RuleKind::new(RuleType::Resting, TileDir::None));
        assert!(rule.attr_map.is_empty());
    }

    #[test]
    fn test_resting_matches_any_direction() {
        let rule = Rule::default();
        assert!(rule.matches(RuleKind::new(RuleType::Resting, TileDir::Left)));
        assert!(!rule.matches(RuleKind::new(RuleType::Moving, TileDir::None)));
    }

    #[test]
    fn test_directed_rule_requires_same_direction() {
        let mut rule = Rule::default();
        rule.set_kind(RuleKind::new(RuleType::Pushing, TileDir::Up));
        assert!(rule.matches(RuleKind::new(RuleType::Pushing, TileDir::Up)));
        assert!(!rule.matches(RuleKind::new(RuleType::Pushing, TileDir::Down)));
    }

    #[test]
    fn test_entry_creates_defaults_once() {
        let mut map = AttrMap::new();
        let e = map.entry(1, 0, 3);
        assert_eq!(e.attrs, alloc::vec![AttrType::Only, AttrType::Exclude, AttrType::Exclude]);
        map.entry(1, 0, 3);
        map.entry(0, 1, 3);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_entry_extends_for_late_kinds() {
        let mut map = AttrMap::new();
        map.set(0, -1, 0, AttrType::Include);
        assert!(map.get(0, -1).is_none());
        map.entry(0, -1, 2).attrs[1] = AttrType::OneOf;
        let e = map.entry(0, -1, 4);
        assert_eq!(
            e.attrs,
            alloc::vec![AttrType::Only, AttrType::OneOf, AttrType::Exclude, AttrType::Exclude]
        );
    }

    #[test]
    fn test_set_ignores_out_of_range_kind() {
        let mut map = AttrMap::new();
        map.entry(-2, 0, 2);
        map.set(-2, 0, 5, AttrType::Include);
        map.set(-2, 0, 1, AttrType::Include);
        assert_eq!(map.get(-2, 0).unwrap().attrs, alloc::vec![AttrType::Only, AttrType::Include]);
    }

    #[test]
    fn test_menu_offset_points_against_travel() {
        assert_eq!(TileDir::Left.menu_offset(), (1, 0));
        assert_eq!(TileDir::Right.menu_offset(), (-1, 0));
        assert_eq!(TileDir::Down.menu_offset(), (0, -1));
        assert_eq!(TileDir::Up.menu_offset(), (0, 1));
    }

    #[test]
    fn test_attr_index_follows_selector_order() {
        for (i, attr) in AttrType::ALL.iter().enumerate() {
            assert_eq!(attr.index(), i);
        }
    }
}
