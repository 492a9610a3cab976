use widget_core::{
    DisplayUnit, FixedInventory, HideRule, InventoryRule, ItemId, ItemSnapshot, Operator,
    ThresholdRule, TrackMode, UnchangedRule,
};

const BERRIES: ItemId = ItemId(101);
const PICKAXE: ItemId = ItemId(202);

fn berry_counter(cadence: u32) -> DisplayUnit {
    DisplayUnit::builder()
        .nickname("berries")
        .cadence(cadence)
        .track_rule(InventoryRule::ItemIdMatch {
            id: BERRIES,
            allow_multiple: true,
        })
        .hide_rule(HideRule::Threshold(ThresholdRule::new(
            Operator::And,
            0,
            true,
            true,
        )))
        .build()
        .unwrap()
}

#[test]
fn quantity_widget_shows_while_stocked_and_hides_when_emptied() {
    let mut inventory = FixedInventory::new();
    inventory.set_main(0, ItemSnapshot::new(BERRIES, 2));
    inventory.set_main(12, ItemSnapshot::new(BERRIES, 5));
    inventory.set_main(31, ItemSnapshot::new(BERRIES, 1));

    let mut widget = berry_counter(1);
    widget.on_tick(&inventory, 0);

    let stats = widget.stats().expect("first recomputation ran");
    assert_eq!(stats.tracked_count, 8);
    assert_eq!(stats.maximum_count, 64);
    assert_eq!(stats.representative.id, BERRIES);
    assert_eq!(stats.counter_label(), "8");
    assert!(widget.is_visible());

    // Everything gets eaten
    for index in [0, 12, 31] {
        inventory.clear_main(index);
    }
    widget.on_tick(&inventory, 1);

    let stats = widget.stats().expect("stats persist after recomputation");
    assert_eq!(stats.tracked_count, 0);
    assert!(!widget.is_visible(), "empty stock at an inclusive zero threshold hides");
}

#[test]
fn durability_widget_with_hysteresis_fades_out_when_the_tool_rests() {
    let mut inventory = FixedInventory::new();
    inventory.set_main(3, ItemSnapshot::with_durability(PICKAXE, 1, 20, 100));

    // Show while the tool is wearing; hide after three quiet recomputations.
    let mut widget = DisplayUnit::builder()
        .nickname("pickaxe")
        .cadence(1)
        .mode(TrackMode::Durability)
        .track_rule(InventoryRule::ItemIdMatch {
            id: PICKAXE,
            allow_multiple: false,
        })
        .hide_rule(HideRule::Unchanged(UnchangedRule::new(
            Operator::And,
            3,
            true,
        )))
        .build()
        .unwrap();

    widget.on_tick(&inventory, 0);
    let stats = widget.stats().expect("first recomputation ran");
    assert_eq!(stats.tracked_count, 80);
    assert_eq!(stats.maximum_count, 100);
    assert!(widget.is_visible(), "first reading differs from the implicit zero");

    // Mining: wear changes every recomputation, widget stays up.
    for (ticks, damage) in [(1, 25), (2, 31)] {
        inventory.set_main(3, ItemSnapshot::with_durability(PICKAXE, 1, damage, 100));
        widget.on_tick(&inventory, ticks);
        assert!(widget.is_visible());
    }

    // Tool rests: two quiet recomputations are not enough...
    widget.on_tick(&inventory, 3);
    widget.on_tick(&inventory, 4);
    assert!(widget.is_visible());

    // ...the third one hides the widget.
    widget.on_tick(&inventory, 5);
    assert!(!widget.is_visible());

    // Any new wear brings it straight back.
    inventory.set_main(3, ItemSnapshot::with_durability(PICKAXE, 1, 32, 100));
    widget.on_tick(&inventory, 6);
    assert!(widget.is_visible());
}

#[test]
fn cadence_gates_recomputation_against_a_changing_inventory() {
    let mut inventory = FixedInventory::new();
    inventory.set_main(0, ItemSnapshot::new(BERRIES, 8));

    let mut widget = berry_counter(20);
    widget.on_tick(&inventory, 0);
    assert_eq!(widget.stats().unwrap().tracked_count, 8);

    // The stock drains between recomputations; off-cadence ticks see nothing.
    inventory.set_main(0, ItemSnapshot::new(BERRIES, 1));
    for ticks in 1..20 {
        widget.on_tick(&inventory, ticks);
        assert_eq!(widget.stats().unwrap().tracked_count, 8);
        assert!(widget.is_visible());
    }

    widget.on_tick(&inventory, 20);
    assert_eq!(widget.stats().unwrap().tracked_count, 1);
}

#[test]
fn bar_fill_tracks_the_stock_level() {
    let mut inventory = FixedInventory::new();
    inventory.set_main(0, ItemSnapshot::new(BERRIES, 32));

    let mut widget = berry_counter(1);
    widget.on_tick(&inventory, 0);
    assert_eq!(widget.stats().unwrap().bar_length(), 9);

    inventory.set_main(1, ItemSnapshot::new(BERRIES, 32));
    widget.on_tick(&inventory, 1);
    assert_eq!(widget.stats().unwrap().bar_length(), 18);

    // Overfull stock clamps at a full bar.
    inventory.set_main(2, ItemSnapshot::new(BERRIES, 64));
    widget.on_tick(&inventory, 2);
    assert_eq!(widget.stats().unwrap().bar_length(), 18);
    assert_eq!(widget.stats().unwrap().counter_label(), "128");
}

#[test]
fn mixed_hide_chain_folds_votes_in_order() {
    let mut inventory = FixedInventory::new();
    inventory.set_main(0, ItemSnapshot::new(BERRIES, 12));

    // Hide when stock is low AND the value has been quiet for two readings.
    let mut widget = DisplayUnit::builder()
        .cadence(1)
        .track_rule(InventoryRule::ItemIdMatch {
            id: BERRIES,
            allow_multiple: true,
        })
        .hide_rule(HideRule::Threshold(ThresholdRule::new(
            Operator::And,
            10,
            true,
            false,
        )))
        .hide_rule(HideRule::Unchanged(UnchangedRule::new(
            Operator::And,
            2,
            true,
        )))
        .build()
        .unwrap();

    // Plenty of stock: the threshold vote alone keeps it up.
    for ticks in 0..4 {
        widget.on_tick(&inventory, ticks);
        assert!(widget.is_visible());
    }

    // Stock drops low; the unchanged counter restarts on the change.
    inventory.set_main(0, ItemSnapshot::new(BERRIES, 3));
    widget.on_tick(&inventory, 4);
    assert!(widget.is_visible(), "low but freshly changed stays visible");

    widget.on_tick(&inventory, 5);
    assert!(widget.is_visible(), "one quiet reading is not enough");

    widget.on_tick(&inventory, 6);
    assert!(!widget.is_visible(), "low and quiet for two readings hides");
}
