//! Literal bodies written when a fetch fails, plus the fixed inline files.

pub const MIT_LICENSE: &str = "MIT License

Copyright (c) [year] [fullname]

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
";

pub const PYTHON_GITIGNORE: &str = "__pycache__/
*.py[cod]
*.egg-info/
.venv/
venv/
.env
dist/
build/
.pytest_cache/
.coverage
";

pub const NODE_GITIGNORE: &str = "node_modules/
npm-debug.log*
yarn-error.log*
.env
dist/
coverage/
";

pub const STATIC_GITIGNORE: &str = ".DS_Store
Thumbs.db
*.log
";

pub const FLASK_APP: &str = "from flask import Flask, render_template

app = Flask(__name__)


@app.route(\"/\")
def index():
    return render_template(\"index.html\")


if __name__ == \"__main__\":
    app.run(debug=True)
";

pub const HTML_SKELETON: &str = "<!DOCTYPE html>
<html lang=\"en\">
<head>
  <meta charset=\"UTF-8\">
  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
  <title>New Project</title>
  <link rel=\"stylesheet\" href=\"style.css\">
</head>
<body>
  <script src=\"script.js\"></script>
</body>
</html>
";

pub const CSS_SKELETON: &str = "*,
*::before,
*::after {
  box-sizing: border-box;
}

body {
  margin: 0;
  font-family: system-ui, sans-serif;
}
";

pub const PACKAGE_JSON: &str = "{
  \"name\": \"app\",
  \"version\": \"1.0.0\",
  \"main\": \"src/server.js\",
  \"scripts\": {
    \"start\": \"node src/server.js\"
  },
  \"dependencies\": {
    \"express\": \"^4.19.2\"
  }
}
";

pub const PYTHON_README: &str = "# Python Project\n";
pub const FLASK_README: &str = "# Flask Project\n";
pub const NODE_README: &str = "# Node.js Project\n";

pub const PYTHON_MAIN: &str = "def main():
    print(\"Hello, world!\")


if __name__ == \"__main__\":
    main()
";

pub const FLASK_REQUIREMENTS: &str = "flask\n";

pub const FLASK_INDEX_HTML: &str = "<!DOCTYPE html>
<html lang=\"en\">
<head>
  <meta charset=\"UTF-8\">
  <title>Flask</title>
  <link rel=\"stylesheet\" href=\"{{ url_for('static', filename='css/style.css') }}\">
</head>
<body>
  <h1>It works!</h1>
</body>
</html>
";

pub const NODE_SERVER: &str = "const app = require(\"./app\");

const port = process.env.PORT || 3000;

app.listen(port, () => {
  console.log(`listening on ${port}`);
});
";

pub const NODE_APP: &str = "const express = require(\"express\");

const app = express();
app.use(express.json());

module.exports = app;
";
