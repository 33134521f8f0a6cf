use entity::{
    attendance, employee, notification, payroll, performance_review,
    prelude::{Employee, Role},
    report, role, task,
};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseTransaction, DbErr,
    DeleteMany, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
};

/// Foreign key carried by a row that is about to be written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reference {
    Role(i32),
    Employee(i32),
}

impl Reference {
    pub fn kind(self) -> &'static str {
        match self {
            Reference::Role(_) => "role",
            Reference::Employee(_) => "employee",
        }
    }

    pub fn id(self) -> i32 {
        match self {
            Reference::Role(id) | Reference::Employee(id) => id,
        }
    }

    pub(crate) async fn resolves(self, txn: &DatabaseTransaction) -> Result<bool, DbErr> {
        let found = match self {
            Reference::Role(id) => Role::find_by_id(id).one(txn).await?.is_some(),
            Reference::Employee(id) => Employee::find_by_id(id).one(txn).await?.is_some(),
        };
        Ok(found)
    }
}

/// An active model the [`crate::Directory`] knows how to persist.
#[allow(async_fn_in_trait)]
pub trait Record: ActiveModelTrait + ActiveModelBehavior + Send + 'static {
    /// Table-level name used in errors and logs.
    const KIND: &'static str;

    /// Primary key, if the row carries one.
    fn key(&self) -> Option<i32>;

    fn model_key(model: &<Self::Entity as EntityTrait>::Model) -> i32;

    /// The foreign key this row writes, if any. Unchanged keys are skipped.
    fn reference(&self) -> Option<Reference> {
        None
    }

    /// All rows in identifier order.
    fn ordered() -> Select<Self::Entity>;

    fn by_key(id: i32) -> Select<Self::Entity>;

    fn delete_key(id: i32) -> DeleteMany<Self::Entity>;

    /// Rows in other tables that still point at `id`.
    async fn dependents(_txn: &DatabaseTransaction, _id: i32) -> Result<u64, DbErr> {
        Ok(0)
    }
}

/// A record that belongs to exactly one employee.
pub trait Owned: Record {
    fn owned_by(employee_id: i32) -> Select<Self::Entity>;
}

fn key_of(value: &ActiveValue<i32>) -> Option<i32> {
    match value {
        ActiveValue::Set(id) | ActiveValue::Unchanged(id) => Some(*id),
        ActiveValue::NotSet => None,
    }
}

fn written(value: &ActiveValue<i32>) -> Option<i32> {
    match value {
        ActiveValue::Set(id) => Some(*id),
        _ => None,
    }
}

impl Record for role::ActiveModel {
    const KIND: &'static str = "role";

    fn key(&self) -> Option<i32> {
        key_of(&self.id)
    }

    fn model_key(model: &role::Model) -> i32 {
        model.id
    }

    fn ordered() -> Select<role::Entity> {
        role::Entity::find().order_by_asc(role::Column::Id)
    }

    fn by_key(id: i32) -> Select<role::Entity> {
        role::Entity::find_by_id(id)
    }

    fn delete_key(id: i32) -> DeleteMany<role::Entity> {
        role::Entity::delete_by_id(id)
    }

    async fn dependents(txn: &DatabaseTransaction, id: i32) -> Result<u64, DbErr> {
        employee::Entity::find()
            .filter(employee::Column::RoleId.eq(id))
            .count(txn)
            .await
    }
}

impl Record for employee::ActiveModel {
    const KIND: &'static str = "employee";

    fn key(&self) -> Option<i32> {
        key_of(&self.id)
    }

    fn model_key(model: &employee::Model) -> i32 {
        model.id
    }

    fn reference(&self) -> Option<Reference> {
        written(&self.role_id).map(Reference::Role)
    }

    fn ordered() -> Select<employee::Entity> {
        employee::Entity::find().order_by_asc(employee::Column::Id)
    }

    fn by_key(id: i32) -> Select<employee::Entity> {
        employee::Entity::find_by_id(id)
    }

    fn delete_key(id: i32) -> DeleteMany<employee::Entity> {
        employee::Entity::delete_by_id(id)
    }

    async fn dependents(txn: &DatabaseTransaction, id: i32) -> Result<u64, DbErr> {
        let counts = [
            attendance::ActiveModel::owned_by(id).count(txn).await?,
            payroll::ActiveModel::owned_by(id).count(txn).await?,
            performance_review::ActiveModel::owned_by(id).count(txn).await?,
            task::ActiveModel::owned_by(id).count(txn).await?,
            notification::ActiveModel::owned_by(id).count(txn).await?,
            report::ActiveModel::owned_by(id).count(txn).await?,
        ];
        Ok(counts.iter().sum())
    }
}

macro_rules! owned_by_employee {
    ($module:ident, $kind:literal) => {
        impl Record for $module::ActiveModel {
            const KIND: &'static str = $kind;

            fn key(&self) -> Option<i32> {
                key_of(&self.id)
            }

            fn model_key(model: &$module::Model) -> i32 {
                model.id
            }

            fn reference(&self) -> Option<Reference> {
                written(&self.employee_id).map(Reference::Employee)
            }

            fn ordered() -> Select<$module::Entity> {
                $module::Entity::find().order_by_asc($module::Column::Id)
            }

            fn by_key(id: i32) -> Select<$module::Entity> {
                $module::Entity::find_by_id(id)
            }

            fn delete_key(id: i32) -> DeleteMany<$module::Entity> {
                $module::Entity::delete_by_id(id)
            }
        }

        impl Owned for $module::ActiveModel {
            fn owned_by(employee_id: i32) -> Select<$module::Entity> {
                Self::ordered().filter($module::Column::EmployeeId.eq(employee_id))
            }
        }
    };
}

owned_by_employee!(attendance, "attendance");
owned_by_employee!(payroll, "payroll");
owned_by_employee!(performance_review, "performance_review");
owned_by_employee!(task, "task");
owned_by_employee!(notification, "notification");
owned_by_employee!(report, "report");

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ActiveValue::Set, IntoActiveModel};

    #[test]
    fn new_rows_report_their_foreign_key() {
        let row = task::ActiveModel {
            name: Set("Complete Module 1".into()),
            employee_id: Set(3),
            ..Default::default()
        };
        assert_eq!(row.key(), None);
        assert_eq!(row.reference(), Some(Reference::Employee(3)));

        let hire = employee::ActiveModel {
            role_id: Set(1),
            ..Default::default()
        };
        assert_eq!(hire.reference(), Some(Reference::Role(1)));
    }

    #[test]
    fn loaded_rows_skip_unchanged_references() {
        let model = notification::Model {
            id: 11,
            message: "Your leave request has been approved".into(),
            date: chrono::NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            is_read: false,
            employee_id: 4,
        };
        let mut row = model.into_active_model();
        row.is_read = Set(true);
        assert_eq!(row.key(), Some(11));
        assert_eq!(row.reference(), None);

        row.employee_id = Set(5);
        assert_eq!(row.reference(), Some(Reference::Employee(5)));
    }

    #[test]
    fn reference_exposes_target_kind() {
        assert_eq!(Reference::Role(2).kind(), "role");
        assert_eq!(Reference::Employee(9).kind(), "employee");
        assert_eq!(Reference::Employee(9).id(), 9);
    }
}
