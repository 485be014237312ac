//! 预导入模块，方便使用

pub use super::applications::{
    ActiveModel as ApplicationActiveModel, Entity as Applications, Model as ApplicationModel,
};
pub use super::counselors::{
    ActiveModel as CounselorActiveModel, Entity as Counselors, Model as CounselorModel,
};
pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::favorites::{
    ActiveModel as FavoriteActiveModel, Entity as Favorites, Model as FavoriteModel,
};
pub use super::notifications::{
    ActiveModel as NotificationActiveModel, Entity as Notifications, Model as NotificationModel,
};
pub use super::tutorials::{
    ActiveModel as TutorialActiveModel, Entity as Tutorials, Model as TutorialModel,
};
pub use super::universities::{
    ActiveModel as UniversityActiveModel, Entity as Universities, Model as UniversityModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
