use a11y_atom::{AtomTable, static_atoms};

mod forward {
    a11y_atom::static_atoms! {
        pub struct Registry;
        const ALL;
        FIRST: {
            alpha: "alpha",
            beta: "beta",
        },
        SECOND: {
            gamma: "gamma",
        },
    }
}

mod backward {
    a11y_atom::static_atoms! {
        pub struct Registry;
        const ALL;
        FIRST: {
            gamma: "gamma",
        },
        SECOND: {
            beta: "beta",
            alpha: "alpha",
        },
    }
}

static_atoms! {
    /// Two names bound to one value.
    struct Aliases;
    const ALIASES;
    VALUES: {
        on: "true",
        yes: "true",
        off: "false",
    },
}

#[test]
fn test_alpha_beta_scenario() {
    let mut table = AtomTable::default();
    let atoms = forward::Registry::initialize(&mut table);

    assert_ne!(atoms.alpha, atoms.beta);
    assert!(table.contains(atoms.alpha));
    assert!(table.contains(atoms.beta));
    assert_eq!(table.lookup("alpha"), Some(atoms.alpha));
    assert_eq!(table.lookup("beta"), Some(atoms.beta));
}

#[test]
fn test_every_slot_is_populated() {
    let mut table = AtomTable::default();
    let atoms = forward::Registry::initialize(&mut table);

    assert_eq!(forward::Registry::LEN, 3);
    assert_eq!(forward::ALL.len(), forward::Registry::LEN);
    assert_eq!(forward::FIRST.len() + forward::SECOND.len(), forward::Registry::LEN);
    assert_eq!(table.len(), forward::Registry::LEN);
    for (atom, id) in atoms.iter() {
        assert_eq!(table.get(id), atom.value());
        assert_eq!(atoms.get(atom.name()), Some(id));
    }
    assert_eq!(atoms.get("delta"), None);
}

#[test]
fn test_declaration_order_does_not_matter() {
    let mut t1 = AtomTable::default();
    let mut t2 = AtomTable::default();
    let a = forward::Registry::initialize(&mut t1);
    let b = backward::Registry::initialize(&mut t2);

    for name in ["alpha", "beta", "gamma"] {
        assert_eq!(a.get(name), b.get(name));
    }
    let a_order: Vec<_> = a.iter().map(|(atom, _)| atom.name()).collect();
    let b_order: Vec<_> = b.iter().map(|(atom, _)| atom.name()).collect();
    assert_eq!(a_order, ["alpha", "beta", "gamma"]);
    assert_eq!(b_order, ["gamma", "beta", "alpha"]);
    assert_eq!(a.alpha, b.alpha);
}

#[test]
fn test_equal_values_share_a_handle() {
    let mut table = AtomTable::default();
    let aliases = Aliases::initialize(&mut table);

    assert_eq!(aliases.on, aliases.yes);
    assert_ne!(aliases.on, aliases.off);
    assert_eq!(table.len(), 2);
}

#[test]
fn test_initialize_twice_is_harmless() {
    let mut table = AtomTable::default();
    let first = forward::Registry::initialize(&mut table);
    let second = forward::Registry::try_initialize(&mut table).unwrap();
    assert_eq!(first, second);
    assert_eq!(table.len(), forward::Registry::LEN);
}

#[test]
fn test_registries_share_a_table() {
    let mut table = AtomTable::default();
    let registry = forward::Registry::initialize(&mut table);
    let aliases = Aliases::initialize(&mut table);
    assert_eq!(table.len(), forward::Registry::LEN + 2);
    assert_eq!(table.lookup("alpha"), Some(registry.alpha));
    assert_eq!(table.lookup("true"), Some(aliases.on));
}
