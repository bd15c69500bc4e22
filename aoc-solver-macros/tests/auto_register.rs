use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, RegisterableSolver, SolveError,
    SolverRegistryBuilder, plugins,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2016, day = 4, title = "Macro Check", tags = ["macro-test", "strings"])]
struct Registered;

impl AocParser for Registered {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for Registered {
    fn solve(shared: &mut &str) -> Result<String, SolveError> {
        Ok(shared.chars().rev().collect())
    }
}

#[test]
fn test_plugin_submitted_with_metadata() {
    let plugin = plugins()
        .find(|p| p.year == 2016 && p.day == 4)
        .expect("plugin registered");
    assert_eq!(plugin.title, "Macro Check");
    assert_eq!(plugin.tags, &["macro-test", "strings"]);
    assert_eq!(plugin.solver.parts(), 1);
}

#[test]
fn test_registered_solver_runs() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|p| p.tags.contains(&"macro-test"))
        .unwrap()
        .build();

    let info = registry.storage().get_info(2016, 4).unwrap();
    assert_eq!(info.name(), "Day 4: Macro Check");
    assert_eq!(info.parts, 1);

    let mut solver = registry.create_solver(2016, 4, "abc").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "cba");
}
