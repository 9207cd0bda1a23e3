//! Behavior every `CustomerRepository` backend must share.
//!
//! Each check creates customers with fresh IDs and emails, so it can run
//! against a store that already holds unrelated rows.

use uuid::Uuid;

use crm_core::customer::{Customer, CustomerRole};
use crm_core::storage::{CustomerRepository, RepositoryError};

pub fn unique_customer(name: &str) -> Customer {
    let id = Uuid::new_v4();
    let email = format!(
        "{}.{}@corp.com",
        name.to_lowercase().replace(' ', "."),
        id.simple()
    );
    Customer::new(name, CustomerRole::PREMIUM, email, "+1 (514) 888-8888").with_id(id)
}

pub async fn create_then_get_returns_equal_record(repo: &dyn CustomerRepository) {
    let customer = unique_customer("Jorge").with_contacted(true);

    repo.create_customer(&customer).await.unwrap();

    assert_eq!(repo.get_customer(customer.id).await.unwrap(), customer);
    assert!(repo.get_customers().await.unwrap().contains(&customer));
}

pub async fn duplicate_id_conflicts(repo: &dyn CustomerRepository) {
    let customer = unique_customer("Ana");
    repo.create_customer(&customer).await.unwrap();
    let before = repo.get_customers().await.unwrap().len();

    let mut same_id = unique_customer("Other");
    same_id.id = customer.id;
    let result = repo.create_customer(&same_id).await;

    assert!(matches!(result, Err(RepositoryError::Conflict { .. })));
    assert_eq!(repo.get_customers().await.unwrap().len(), before);
    assert_eq!(repo.get_customer(customer.id).await.unwrap(), customer);
}

pub async fn duplicate_email_conflicts(repo: &dyn CustomerRepository) {
    let customer = unique_customer("Bruno");
    repo.create_customer(&customer).await.unwrap();
    let before = repo.get_customers().await.unwrap().len();

    let mut same_email = unique_customer("Whatever Dude");
    same_email.email = customer.email.clone();
    let result = repo.create_customer(&same_email).await;

    assert_eq!(
        result,
        Err(RepositoryError::email_conflict(customer.email.clone()))
    );
    assert_eq!(repo.get_customers().await.unwrap().len(), before);
    assert_eq!(
        repo.get_customer(same_email.id).await,
        Err(RepositoryError::NotFound(same_email.id))
    );
}

pub async fn invalid_fields_are_rejected(repo: &dyn CustomerRepository) {
    let mut bad_email = unique_customer("Carla");
    bad_email.email = "not-an-email".to_string();
    assert_eq!(
        repo.create_customer(&bad_email).await,
        Err(RepositoryError::InvalidEmail("not-an-email".to_string()))
    );

    let mut bad_phone = unique_customer("Diego");
    bad_phone.phone_number = "abc".to_string();
    assert_eq!(
        repo.create_customer(&bad_phone).await,
        Err(RepositoryError::InvalidPhone("abc".to_string()))
    );

    assert_eq!(
        repo.get_customer(bad_email.id).await,
        Err(RepositoryError::NotFound(bad_email.id))
    );
    assert_eq!(
        repo.get_customer(bad_phone.id).await,
        Err(RepositoryError::NotFound(bad_phone.id))
    );
}

pub async fn update_round_trip(repo: &dyn CustomerRepository) {
    let customer = unique_customer("Elena");
    repo.create_customer(&customer).await.unwrap();

    let mut changed = customer.clone();
    changed.name = "Elena Ruiz".to_string();
    changed.role = CustomerRole::PARTNER;
    changed.email = format!("elena.ruiz.{}@corp.com", customer.id.simple());
    changed.phone_number = "514 999 7777".to_string();
    changed.contacted = true;
    repo.update_customer(&changed).await.unwrap();

    assert_eq!(repo.get_customer(customer.id).await.unwrap(), changed);
}

pub async fn update_unknown_id_is_not_found(repo: &dyn CustomerRepository) {
    let customer = unique_customer("Ghost");

    let result = repo.update_customer(&customer).await;

    assert_eq!(result, Err(RepositoryError::NotFound(customer.id)));
    assert_eq!(
        repo.get_customer(customer.id).await,
        Err(RepositoryError::NotFound(customer.id))
    );
}

pub async fn update_to_taken_email_conflicts(repo: &dyn CustomerRepository) {
    let first = unique_customer("Fabio");
    let second = unique_customer("Gina");
    repo.create_customer(&first).await.unwrap();
    repo.create_customer(&second).await.unwrap();

    let mut stolen = second.clone();
    stolen.email = first.email.clone();
    let result = repo.update_customer(&stolen).await;

    assert!(matches!(
        result,
        Err(RepositoryError::Conflict { field: "email", .. })
    ));
    assert_eq!(repo.get_customer(second.id).await.unwrap(), second);
}

pub async fn delete_removes_record(repo: &dyn CustomerRepository) {
    let customer = unique_customer("Hugo");
    repo.create_customer(&customer).await.unwrap();
    let before = repo.get_customers().await.unwrap().len();

    repo.delete_customer(customer.id).await.unwrap();

    assert_eq!(repo.get_customers().await.unwrap().len(), before - 1);
    assert_eq!(
        repo.get_customer(customer.id).await,
        Err(RepositoryError::NotFound(customer.id))
    );
    assert_eq!(
        repo.delete_customer(customer.id).await,
        Err(RepositoryError::NotFound(customer.id))
    );
}

pub async fn unknown_id_is_not_found(repo: &dyn CustomerRepository) {
    let id = Uuid::new_v4();

    assert_eq!(
        repo.get_customer(id).await,
        Err(RepositoryError::NotFound(id))
    );
    assert_eq!(
        repo.delete_customer(id).await,
        Err(RepositoryError::NotFound(id))
    );
}
