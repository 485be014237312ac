//! 课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub university_id: i64,
    pub name: String,
    pub faculty: Option<String>,
    pub level: Option<String>,
    pub duration: Option<String>,
    pub tuition_fee: Option<String>,
    pub ielts_overall: Option<String>,
    pub intake: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::universities::Entity",
        from = "Column::UniversityId",
        to = "super::universities::Column::Id"
    )]
    University,
    #[sea_orm(has_many = "super::favorites::Entity")]
    Favorites,
}

impl Related<super::universities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::University.def()
    }
}

impl Related<super::favorites::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorites.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_course(self) -> crate::models::courses::entities::Course {
        use crate::models::courses::entities::Course;
        use chrono::{DateTime, Utc};

        Course {
            id: self.id,
            university_id: self.university_id,
            name: self.name,
            faculty: self.faculty,
            level: self.level,
            duration: self.duration,
            tuition_fee: self.tuition_fee,
            ielts_overall: self.ielts_overall,
            intake: self.intake,
            description: self.description,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }

    /// 与左连接得到的大学行合并
    pub fn with_university(
        self,
        university: Option<super::universities::Model>,
    ) -> crate::models::courses::entities::CourseWithUniversity {
        crate::models::courses::entities::CourseWithUniversity {
            course: self.into_course(),
            university: university.map(|u| u.into_university()),
        }
    }
}
