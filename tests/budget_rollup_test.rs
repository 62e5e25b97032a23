use estimate_core::buildings::BuildingServiceTrait;
use estimate_core::expenditures::{ExpenditureServiceTrait, ExpenditureType};
use estimate_core::sections::SectionServiceTrait;
use rust_decimal_macros::dec;

mod common;

#[test]
fn test_parent_sections_for_empty_hierarchies() {
    tokio_test::block_on(async {
        let ctx = common::setup();

        let building = ctx
            .buildings
            .create_building(common::new_building("Riverside Tower"))
            .await
            .unwrap();

        // A building without sections yields an empty list
        assert!(ctx
            .sections
            .get_parent_sections(&building.id)
            .unwrap()
            .is_empty());

        // So does an id that does not exist at all
        assert!(ctx
            .sections
            .get_parent_sections("no-such-building")
            .unwrap()
            .is_empty());

        // A root section with no children carries a zero budget
        let root = ctx
            .sections
            .create_section(common::new_section(&building.id, None, "Substructure"))
            .await
            .unwrap();

        let roots = ctx.sections.get_parent_sections(&building.id).unwrap();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].id, root.id);
        assert_eq!(roots[0].total_budget, dec!(0.00));
    });
}

#[test]
fn test_parent_section_budget_sums_children() {
    tokio_test::block_on(async {
        let ctx = common::setup();

        let building = ctx
            .buildings
            .create_building(common::new_building("Riverside Tower"))
            .await
            .unwrap();
        let root = ctx
            .sections
            .create_section(common::new_section(&building.id, None, "Substructure"))
            .await
            .unwrap();
        let child_a = ctx
            .sections
            .create_section(common::new_section(
                &building.id,
                Some(&root.id),
                "Earthworks",
            ))
            .await
            .unwrap();
        let child_b = ctx
            .sections
            .create_section(common::new_section(
                &building.id,
                Some(&root.id),
                "Reinforcement",
            ))
            .await
            .unwrap();

        ctx.expenditures
            .create_expenditure(common::new_expenditure(
                &child_a.id,
                ExpenditureType::Work,
                "Excavation",
                "2.00000000",
                "10.00",
            ))
            .await
            .unwrap();
        ctx.expenditures
            .create_expenditure(common::new_expenditure(
                &child_b.id,
                ExpenditureType::Material,
                "Rebar",
                "3.00000000",
                "5.00",
            ))
            .await
            .unwrap();

        // Lines attached directly to the root are outside the rollup
        // convention and must not count towards its budget
        ctx.expenditures
            .create_expenditure(common::new_expenditure(
                &root.id,
                ExpenditureType::Work,
                "Site setup",
                "4.00000000",
                "100.00",
            ))
            .await
            .unwrap();

        let roots = ctx.sections.get_parent_sections(&building.id).unwrap();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].total_budget, dec!(35.00));
    });
}

#[test]
fn test_budget_rounds_after_multiplication() {
    tokio_test::block_on(async {
        let ctx = common::setup();

        let building = ctx
            .buildings
            .create_building(common::new_building("Depot"))
            .await
            .unwrap();
        let root = ctx
            .sections
            .create_section(common::new_section(&building.id, None, "Finishes"))
            .await
            .unwrap();
        let child = ctx
            .sections
            .create_section(common::new_section(&building.id, Some(&root.id), "Paint"))
            .await
            .unwrap();

        // 0.33333333 * 3.00 = 0.99999999; truncating the quantity before the
        // multiplication would produce 0.99 instead of 1.00
        ctx.expenditures
            .create_expenditure(common::new_expenditure(
                &child.id,
                ExpenditureType::Material,
                "Primer",
                "0.33333333",
                "3.00",
            ))
            .await
            .unwrap();

        let roots = ctx.sections.get_parent_sections(&building.id).unwrap();
        assert_eq!(roots[0].total_budget, dec!(1.00));
    });
}

#[test]
fn test_building_cost_breakdown() {
    tokio_test::block_on(async {
        let ctx = common::setup();

        // Building A: one WORK and one MATERIAL line under a child section
        let building_a = ctx
            .buildings
            .create_building(common::new_building("Riverside Tower"))
            .await
            .unwrap();
        let root_a = ctx
            .sections
            .create_section(common::new_section(&building_a.id, None, "Substructure"))
            .await
            .unwrap();
        let child_a = ctx
            .sections
            .create_section(common::new_section(
                &building_a.id,
                Some(&root_a.id),
                "Earthworks",
            ))
            .await
            .unwrap();
        ctx.expenditures
            .create_expenditure(common::new_expenditure(
                &child_a.id,
                ExpenditureType::Work,
                "Excavation",
                "1.00000000",
                "100.00",
            ))
            .await
            .unwrap();
        ctx.expenditures
            .create_expenditure(common::new_expenditure(
                &child_a.id,
                ExpenditureType::Material,
                "Rebar",
                "2.00000000",
                "50.00",
            ))
            .await
            .unwrap();

        // Building B: a line owned directly by a root section still counts
        // towards the building totals
        let building_b = ctx
            .buildings
            .create_building(common::new_building("Depot"))
            .await
            .unwrap();
        let root_b = ctx
            .sections
            .create_section(common::new_section(&building_b.id, None, "Yard"))
            .await
            .unwrap();
        ctx.expenditures
            .create_expenditure(common::new_expenditure(
                &root_b.id,
                ExpenditureType::Work,
                "Fencing",
                "1.00000000",
                "10.00",
            ))
            .await
            .unwrap();

        // Building C: no expenditures at all
        let building_c = ctx
            .buildings
            .create_building(common::new_building("Warehouse"))
            .await
            .unwrap();

        let summaries = ctx.buildings.get_buildings().unwrap();
        assert_eq!(summaries.len(), 3);

        let a = summaries.iter().find(|s| s.id == building_a.id).unwrap();
        assert_eq!(a.works_amount, dec!(100.00));
        assert_eq!(a.materials_amount, dec!(100.00));

        let b = summaries.iter().find(|s| s.id == building_b.id).unwrap();
        assert_eq!(b.works_amount, dec!(10.00));
        assert_eq!(b.materials_amount, dec!(0.00));

        let c = summaries.iter().find(|s| s.id == building_c.id).unwrap();
        assert_eq!(c.works_amount, dec!(0.00));
        assert_eq!(c.materials_amount, dec!(0.00));
    });
}
