//! Integration tests for the project service over a real repository.

mod common;

use common::database::create_test_service;
use common::{dec, ProjectFixture};
use projects::{Error, Material};

#[test]
fn test_service_lifecycle() {
    let service = create_test_service();

    let saved = service
        .add_project(ProjectFixture::new("Birdhouse").estimated("2.5").build())
        .unwrap();
    let id = saved.id.unwrap();

    let mut changed = service.fetch_project_by_id(id).unwrap();
    changed.actual_hours = Some(dec("3"));
    service.modify_project_details(&changed).unwrap();
    assert_eq!(
        service
            .fetch_project_by_id(id)
            .unwrap()
            .actual_hours
            .unwrap()
            .to_string(),
        "3.00"
    );

    service.delete_project(id).unwrap();
    assert!(service.fetch_project_by_id(id).unwrap_err().is_not_found());
    assert!(service.delete_project(id).unwrap_err().is_not_found());
}

#[test]
fn test_not_found_names_identifier() {
    let service = create_test_service();

    let err = service.fetch_project_by_id(31).unwrap_err();
    assert_eq!(err.to_string(), "project with ID=31 does not exist");

    let ghost = ProjectFixture::new("Ghost").build().with_id(32);
    let err = service.modify_project_details(&ghost).unwrap_err();
    assert_eq!(err.to_string(), "project with ID=32 does not exist");
}

#[test]
fn test_children_require_existing_project() {
    let service = create_test_service();

    assert!(service
        .add_material(1, Material::new("Glue", None, None))
        .unwrap_err()
        .is_not_found());
    assert!(service.add_step(1, "Clamp").unwrap_err().is_not_found());
    assert!(service
        .add_category_to_project(1, "Indoor")
        .unwrap_err()
        .is_not_found());
    assert!(service.fetch_all_categories().unwrap().is_empty());
}

#[test]
fn test_children_attach_to_project() {
    let service = create_test_service();
    let id = service
        .add_project(ProjectFixture::new("Workbench").build())
        .unwrap()
        .id
        .unwrap();

    service
        .add_material(id, Material::new("Plywood", Some(2), Some(dec("45.50"))))
        .unwrap();
    service.add_step(id, "Cut top").unwrap();
    service.add_step(id, "Attach legs").unwrap();
    service.add_category_to_project(id, "Shop").unwrap();
    service.add_category_to_project(id, "Shop").unwrap();

    let project = service.fetch_project_by_id(id).unwrap();
    assert_eq!(project.materials.len(), 1);
    assert_eq!(project.steps.iter().map(|s| s.order).collect::<Vec<_>>(), [1, 2]);
    assert_eq!(project.categories.len(), 1);
    assert_eq!(service.fetch_all_categories().unwrap().len(), 1);
}

#[test]
fn test_blank_category_rejected() {
    let service = create_test_service();
    let id = service
        .add_project(ProjectFixture::new("Shelf").build())
        .unwrap()
        .id
        .unwrap();

    let err = service.add_category_to_project(id, "  ").unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}
