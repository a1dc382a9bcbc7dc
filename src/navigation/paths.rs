/// 免认证路径前缀
/// 登录、注册相关页面、患者公开商品页，以及登录接口本身
pub fn default_public_paths() -> Vec<String> {
    [
        "/login",
        "/cadastro",
        "/pre-cadastro",
        "/recuperar-senha",
        "/patient/produtos",
        "/api/auth/login",
    ]
    .iter()
    .map(|p| p.to_string())
    .collect()
}
