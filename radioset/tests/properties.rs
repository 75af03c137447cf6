use proptest::prelude::*;
use radioset::{Radio, RadioGroup};

#[derive(Debug, Clone)]
enum Op {
    SelectByIndex(usize),
    SelectItem(usize),
    SelectForeign,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..8).prop_map(Op::SelectByIndex),
        (0usize..8).prop_map(Op::SelectItem),
        Just(Op::SelectForeign),
    ]
}

fn build_group(len: usize) -> (RadioGroup<Radio>, Vec<Radio>) {
    let group = RadioGroup::new();
    let radios: Vec<Radio> = (0..len)
        .map(|index| Radio::new(format!("option {}", index)))
        .collect();
    for radio in &radios {
        group.add_item(radio.clone());
    }
    (group, radios)
}

proptest! {
    #[test]
    fn prop_at_most_one_member_selected(
        len in 0usize..6,
        ops in proptest::collection::vec(op_strategy(), 0..32),
    ) {
        let (group, radios) = build_group(len);

        for op in ops {
            match op {
                Op::SelectByIndex(index) => {
                    group.set_selected_by_index(index);
                }
                Op::SelectItem(index) => {
                    if let Some(radio) = radios.get(index) {
                        group.select_item(radio);
                    }
                }
                Op::SelectForeign => {
                    group.select_item(&Radio::new("foreign"));
                }
            }

            let claimants: Vec<usize> = radios
                .iter()
                .enumerate()
                .filter(|(_, radio)| radio.is_selected())
                .map(|(index, _)| index)
                .collect();
            prop_assert!(claimants.len() <= 1);
            prop_assert_eq!(group.selected_index(), claimants.first().copied());
        }
    }

    #[test]
    fn prop_select_by_index_bounds_check(len in 0usize..6, index in 0usize..8) {
        let (group, _radios) = build_group(len);

        let accepted = group.set_selected_by_index(index);
        prop_assert_eq!(accepted, index < len);
        if accepted {
            prop_assert_eq!(group.selected_index(), Some(index));
        } else {
            prop_assert_eq!(group.selected_index(), None);
        }
    }

    #[test]
    fn prop_foreign_select_always_clears(
        len in 0usize..6,
        preselect in 0usize..6,
    ) {
        let (group, radios) = build_group(len);
        group.set_selected_by_index(preselect);

        prop_assert!(!group.select_item(&Radio::new("foreign")));
        prop_assert_eq!(group.selected_index(), None);
        prop_assert!(radios.iter().all(|radio| !radio.is_selected()));
    }
}
