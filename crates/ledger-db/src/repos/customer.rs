//! Customer repository.

use ledger_core::entities::{Customer, CustomerField};
use ledger_core::ids::PREFIX_CUSTOMER;

use crate::error::DatabaseError;
use crate::helpers::get_string_or_empty;
use crate::service::LedgerService;

const SELECT_COLS: &str = "id, name, email, image_url";

fn row_to_customer(row: &libsql::Row) -> Result<Customer, DatabaseError> {
    Ok(Customer {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        image_url: get_string_or_empty(row, 3)?,
    })
}

impl LedgerService {
    pub async fn create_customer(
        &self,
        name: &str,
        email: &str,
        image_url: &str,
    ) -> Result<Customer, DatabaseError> {
        let id = self.db().generate_id(PREFIX_CUSTOMER).await?;

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO customers ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4)"),
                libsql::params![id.as_str(), name, email, image_url],
            )
            .await?;

        Ok(Customer {
            id,
            name: name.to_string(),
            email: email.to_string(),
            image_url: image_url.to_string(),
        })
    }

    pub async fn get_customer(&self, id: &str) -> Result<Customer, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM customers WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_customer(&row)
    }

    /// Customers for the invoice form's select, ordered by name.
    pub async fn list_customers(&self) -> Result<Vec<CustomerField>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT id, name FROM customers ORDER BY name ASC", ())
            .await?;

        let mut customers = Vec::new();
        while let Some(row) = rows.next().await? {
            customers.push(CustomerField {
                id: row.get(0)?,
                name: row.get(1)?,
            });
        }
        Ok(customers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;

    #[tokio::test]
    async fn create_customer_roundtrip() {
        let svc = test_service().await;
        let customer = svc
            .create_customer("Lee Robinson", "lee@robinson.com", "/customers/lee.png")
            .await
            .unwrap();

        assert!(customer.id.starts_with("cus-"));
        let fetched = svc.get_customer(&customer.id).await.unwrap();
        assert_eq!(fetched, customer);
    }

    #[tokio::test]
    async fn get_missing_customer_is_no_result() {
        let svc = test_service().await;
        let result = svc.get_customer("cus-missing").await;
        assert!(matches!(result, Err(DatabaseError::NoResult)));
    }

    #[tokio::test]
    async fn list_customers_sorted_by_name() {
        let svc = test_service().await;
        svc.create_customer("Michael Novotny", "m@n.com", "").await.unwrap();
        svc.create_customer("Amy Burns", "a@b.com", "").await.unwrap();
        svc.create_customer("Hector Simpson", "h@s.com", "").await.unwrap();

        let names: Vec<String> = svc
            .list_customers()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["Amy Burns", "Hector Simpson", "Michael Novotny"]);
    }
}
