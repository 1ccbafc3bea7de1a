pub const BUILTIN_CSS: &str = include_str!("builtin.css");

pub const PAGE_JS: &str = r#"(function () {
  var storageKey = "theme";
  var body = document.body;
  var navLinks = document.querySelectorAll(".nav-links a");
  var sections = document.querySelectorAll(".section");
  var menuToggle = document.querySelector(".mobile-menu-toggle");
  var navContainer = document.querySelector(".nav-links");
  var themeToggle = document.getElementById("theme-toggle");

  function applyTheme(theme) {
    if (theme === "light-mode" || theme === "dark-mode") {
      body.className = theme;
    }
  }

  try {
    applyTheme(localStorage.getItem(storageKey));
  } catch (_) {}

  if (themeToggle) {
    themeToggle.addEventListener("click", function () {
      var next = body.classList.contains("light-mode") ? "dark-mode" : "light-mode";
      applyTheme(next);
      try {
        localStorage.setItem(storageKey, next);
      } catch (_) {}
    });
  }

  navLinks.forEach(function (link) {
    link.addEventListener("click", function (e) {
      e.preventDefault();
      navLinks.forEach(function (l) { l.classList.remove("active"); });
      link.classList.add("active");
      sections.forEach(function (s) { s.classList.remove("active"); });
      var target = document.getElementById(link.getAttribute("href").substring(1));
      if (!target) return;
      target.classList.add("active");
      navContainer.classList.remove("active");
      window.scrollTo({ top: target.offsetTop - 80, behavior: "smooth" });
    });
  });

  if (menuToggle) {
    menuToggle.addEventListener("click", function () {
      navContainer.classList.toggle("active");
    });
  }

  document.addEventListener("click", function (e) {
    if (!e.target.closest("nav") && navContainer.classList.contains("active")) {
      navContainer.classList.remove("active");
    }
  });

  window.addEventListener("resize", function () {
    if (window.innerWidth > 768 && navContainer.classList.contains("active")) {
      navContainer.classList.remove("active");
    }
  });

  document.querySelectorAll(".project-item.linked").forEach(function (item) {
    item.addEventListener("click", function () {
      window.open(item.dataset.link, "_blank");
    });
  });
})();"#;
