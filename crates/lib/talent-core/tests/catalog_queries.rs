use talent_core::{MatchCase, SkillCatalog, SkillField, TalentServices};
use talent_store::{Dataset, Employee, JobOffering, SkillRecord};

const EMPLOYEES: &str = r#"[
    { "id": 1, "name": "Ann", "hardSkills": ["Azure", "C#"], "softSkills": ["Teamwerk"] },
    { "id": 2, "name": "Bo", "hardSkills": ["Java"], "softSkills": [] },
    { "id": 3, "name": "Cas van Dijk", "softSkills": ["Communicatie", "Leiderschap"] },
    { "id": 4 }
]"#;

const OFFERINGS: &str = r#"[
    {
        "id": 10,
        "title": "Azure Cloud Engineer",
        "requiredSkills": ["Azure", "Terraform"],
        "softSkills": ["Communicatie"],
        "location": "Utrecht",
        "employmentType": "Fulltime"
    },
    { "id": 11, "title": "Backend Developer", "requiredSkills": ["Java", "Spring"] }
]"#;

fn employee_catalog() -> SkillCatalog<Employee> {
    SkillCatalog::new(Dataset::from_json(EMPLOYEES).expect("employee fixture should load"))
}

fn offering_catalog() -> SkillCatalog<JobOffering> {
    SkillCatalog::new(Dataset::from_json(OFFERINGS).expect("offering fixture should load"))
}

fn ids<R: SkillRecord>(records: &[&R]) -> Vec<i64> {
    records.iter().map(|record| record.id()).collect()
}

#[test]
fn get_round_trips_every_record() {
    let catalog = employee_catalog();

    for record in catalog.list() {
        let found = catalog.get(record.id()).expect("id should resolve");
        assert_eq!(found.id(), record.id());
    }
    assert!(catalog.get(99).is_none());
}

#[test]
fn find_by_skill_is_case_insensitive() {
    let catalog = employee_catalog();

    for query in ["Azure", "azure", "AZURE"] {
        let matches = catalog.find_by_skill(SkillField::Hard, query);
        assert_eq!(ids(&matches), vec![1], "query {query:?} should find Ann");
    }
}

#[test]
fn empty_query_matches_exactly_the_non_empty_lists() {
    let catalog = employee_catalog();

    let hard = catalog.find_by_skill(SkillField::Hard, "");
    assert_eq!(ids(&hard), vec![1, 2]);

    // Bo's soft skill list is present but empty; Cas has no hard skills at
    // all. Neither matches, neither errors.
    let soft = catalog.find_by_skill(SkillField::Soft, "");
    assert_eq!(ids(&soft), vec![1, 3]);
}

#[test]
fn absent_tag_lists_are_excluded_without_error() {
    let catalog = employee_catalog();

    let matches = catalog.find_by_skill(SkillField::Hard, "azure");
    assert!(!ids(&matches).contains(&3));
    assert!(!ids(&matches).contains(&4));
}

#[test]
fn skill_matches_preserve_dataset_order() {
    let json = r#"[
        { "id": 5, "name": "Dana", "hardSkills": ["Kubernetes"] },
        { "id": 1, "name": "Ann", "hardSkills": ["Kubernetes"] },
        { "id": 3, "name": "Cas", "hardSkills": ["Kubernetes"] }
    ]"#;
    let catalog =
        SkillCatalog::<Employee>::new(Dataset::from_json(json).expect("fixture should load"));

    let matches = catalog.find_by_skill(SkillField::Hard, "kubernetes");
    assert_eq!(ids(&matches), vec![5, 1, 3]);
}

#[test]
fn name_lookup_is_case_sensitive_by_default() {
    let catalog = employee_catalog();

    let found = catalog.get_by_name("van Dijk").expect("partial name should match");
    assert_eq!(found.id(), 3);
    assert!(catalog.get_by_name("ann").is_none());
    assert!(catalog.get_by_name("Nobody").is_none());
}

#[test]
fn name_lookup_case_folding_is_configurable() {
    let catalog = employee_catalog().with_name_match(MatchCase::Insensitive);

    let found = catalog.get_by_name("ann").expect("folded name should match");
    assert_eq!(found.id(), 1);
}

#[test]
fn name_lookup_returns_first_match_in_dataset_order() {
    let catalog = employee_catalog();

    // Empty query is a substring of every name; the first named record wins.
    let found = catalog.get_by_name("").expect("empty query should match");
    assert_eq!(found.id(), 1);
}

#[test]
fn offerings_share_the_generic_query_shapes() {
    let catalog = offering_catalog();

    let by_title = catalog.get_by_name("Cloud").expect("title substring should match");
    assert_eq!(by_title.id(), 10);

    let technical = catalog.find_by_skill(SkillField::Hard, "terraform");
    assert_eq!(ids(&technical), vec![10]);

    let soft = catalog.find_by_skill(SkillField::Soft, "communicatie");
    assert_eq!(ids(&soft), vec![10]);
}

#[test]
fn services_bundle_loads_both_datasets() {
    let services =
        TalentServices::from_json(EMPLOYEES, OFFERINGS).expect("fixtures should load");

    assert_eq!(services.employees().len(), 4);
    assert_eq!(services.offerings().len(), 2);
    assert!(!services.employees().is_empty());
}

#[test]
fn services_bundle_fails_on_any_malformed_artifact() {
    assert!(TalentServices::from_json(EMPLOYEES, "{ nope").is_err());
    assert!(TalentServices::from_json("[]", OFFERINGS).is_ok());
}

#[test]
fn sample_dataset_end_to_end() {
    let json = r#"[
        { "id": 1, "name": "Ann", "hardSkills": ["Azure", "C#"] },
        { "id": 2, "name": "Bo", "hardSkills": ["Java"] }
    ]"#;
    let catalog =
        SkillCatalog::<Employee>::new(Dataset::from_json(json).expect("sample should load"));

    let azure = catalog.find_by_skill(SkillField::Hard, "azure");
    assert_eq!(ids(&azure), vec![1]);

    let bo = catalog.get(2).expect("id 2 should resolve");
    assert_eq!(bo.name(), Some("Bo"));

    // Missing id is a successful empty result, not an error.
    assert!(catalog.get(99).is_none());
}
