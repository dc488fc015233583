use askama::Template;

#[derive(Template)]
#[template(path = "template.html")]
pub struct TestTemplate<'a> {
    pub app_name: &'a str,
    pub today: String,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate<'a> {
    pub app_name: &'a str,
}

#[derive(Template)]
#[template(path = "forbidden.html")]
pub struct ForbiddenTemplate<'a> {
    pub app_name: &'a str,
}
