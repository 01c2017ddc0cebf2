use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single employee record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub salary: f64,
}

// Decoding is lenient: keys match field names ignoring ASCII case, the last
// occurrence of a field wins, absent or null fields keep their zero value,
// unknown keys are skipped and a top-level null is the zero employee.
impl<'de> Deserialize<'de> for Employee {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(EmployeeVisitor)
    }
}

struct EmployeeVisitor;

impl<'de> Visitor<'de> for EmployeeVisitor {
    type Value = Employee;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an employee object or null")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Employee, E> {
        Ok(Employee::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Employee, E> {
        Ok(Employee::default())
    }

    fn visit_map<A>(self, mut map: A) -> Result<Employee, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut employee = Employee::default();
        while let Some(key) = map.next_key::<String>()? {
            match key.to_ascii_lowercase().as_str() {
                "id" => set(&mut employee.id, map.next_value()?),
                "name" => set(&mut employee.name, map.next_value()?),
                "position" => set(&mut employee.position, map.next_value()?),
                "salary" => set(&mut employee.salary, map.next_value()?),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(employee)
    }
}

fn set<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}
